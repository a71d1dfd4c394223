//! Operator overloads for [`Polynomial`].
//!
//! The accepted operand set is {polynomial, scalar-of-R}, resolved at
//! compile time: any other right-hand kind is a type error rather than a
//! runtime failure. Left-scalar forms are provided for the primitive
//! numeric types. Reflected subtraction uses its own formula — `s − p`
//! and `p − s` are different operations.

use std::ops::{Add, Mul, Neg, Sub};

use ruffini_rings::Ring;

use crate::polynomial::Polynomial;

macro_rules! poly_binop {
    ($trait:ident, $method:ident) => {
        impl<R: Ring> $trait<Polynomial<R>> for Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: Polynomial<R>) -> Polynomial<R> {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl<R: Ring> $trait<&Polynomial<R>> for Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: &Polynomial<R>) -> Polynomial<R> {
                Polynomial::$method(&self, rhs)
            }
        }

        impl<R: Ring> $trait<Polynomial<R>> for &Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: Polynomial<R>) -> Polynomial<R> {
                Polynomial::$method(self, &rhs)
            }
        }

        impl<R: Ring> $trait<&Polynomial<R>> for &Polynomial<R> {
            type Output = Polynomial<R>;

            fn $method(self, rhs: &Polynomial<R>) -> Polynomial<R> {
                Polynomial::$method(self, rhs)
            }
        }
    };
}

poly_binop!(Add, add);
poly_binop!(Sub, sub);
poly_binop!(Mul, mul);

impl<R: Ring> Add<R> for Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: R) -> Polynomial<R> {
        self.add_scalar(&rhs)
    }
}

impl<R: Ring> Add<R> for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: R) -> Polynomial<R> {
        self.add_scalar(&rhs)
    }
}

impl<R: Ring> Sub<R> for Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: R) -> Polynomial<R> {
        self.sub_scalar(&rhs)
    }
}

impl<R: Ring> Sub<R> for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: R) -> Polynomial<R> {
        self.sub_scalar(&rhs)
    }
}

impl<R: Ring> Mul<R> for Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: R) -> Polynomial<R> {
        self.scale(&rhs)
    }
}

impl<R: Ring> Mul<R> for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn mul(self, rhs: R) -> Polynomial<R> {
        self.scale(&rhs)
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Polynomial<R> {
        Polynomial::neg(&self)
    }
}

impl<R: Ring> Neg for &Polynomial<R> {
    type Output = Polynomial<R>;

    fn neg(self) -> Polynomial<R> {
        Polynomial::neg(self)
    }
}

// Left-scalar operators cannot be written generically (the scalar is the
// `Self` type), so they are instantiated per primitive.
macro_rules! left_scalar_ops {
    ($($t:ty),* $(,)?) => {$(
        impl Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs.add_scalar(&self)
            }
        }

        impl Add<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs.add_scalar(&self)
            }
        }

        impl Sub<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn sub(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs.sub_from_scalar(&self)
            }
        }

        impl Sub<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn sub(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs.sub_from_scalar(&self)
            }
        }

        impl Mul<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: Polynomial<$t>) -> Polynomial<$t> {
                rhs.scale(&self)
            }
        }

        impl Mul<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn mul(self, rhs: &Polynomial<$t>) -> Polynomial<$t> {
                rhs.scale(&self)
            }
        }
    )*};
}

left_scalar_ops!(i8, i16, i32, i64, i128, isize, f32, f64);
