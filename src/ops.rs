//! よく使う演算の実装
//!
//! 各構造体は演算そのものを表す大きさ0の値で, 要素の型`T`は型引数で指定する.

use crate::lazysegtree::LazyMonoid;
use crate::util::{
    Associativity, Commutativity, HasMax, HasMin, HasOne, HasZero, Idempotence, Identity, Inverse,
    Magma,
};
use std::marker::PhantomData;
use std::ops::{Add, Mul, Rem, Sub};

/// 型引数だけを持つ演算の構造体を定義するマクロ
///
/// `T`に制約を課さずにClone, Copy, Default, Debugを実装する.
macro_rules! def_op {
    ($($(#[$attr: meta])* $name: ident),* $(,)?) => {$(
        $(#[$attr])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }
        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }
        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<T> Copy for $name<T> {}
        impl<T> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    )*};
}

def_op! {
    /// 加法. 逆元に減法を使うのでFenwickTreeの既定の演算になる
    Additive,
    /// 乗法
    Multiplicative,
    /// 最小値
    Min,
    /// 最大値
    Max,
    /// 値と位置の組の最小値. 値が等しければ位置の小さい方を選ぶ
    MinIndex,
    /// 最大公約数. 非負の値にのみ使える
    Gcd,
    /// 区間加算・区間和
    RangeAddSum,
    /// 区間加算・区間最小値
    RangeAddMin,
    /// 区間加算・区間最大値
    RangeAddMax,
    /// 区間代入・区間和
    RangeAssignSum,
}

impl<T: Clone + Add<Output = T>> Magma for Additive<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}
impl<T: Clone + Add<Output = T> + HasZero> Identity for Additive<T> {
    fn e(&self) -> T {
        T::zero()
    }
}
impl<T: Clone + Add<Output = T> + Sub<Output = T> + HasZero> Inverse for Additive<T> {
    fn inv(&self, v: &T) -> T {
        T::zero() - v.clone()
    }
    fn opinv(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() - rhs.clone()
    }
}
impl<T: Clone + Add<Output = T>> Associativity for Additive<T> {}
impl<T: Clone + Add<Output = T>> Commutativity for Additive<T> {}

impl<T: Clone + Mul<Output = T>> Magma for Multiplicative<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() * rhs.clone()
    }
}
impl<T: Clone + Mul<Output = T> + HasOne> Identity for Multiplicative<T> {
    fn e(&self) -> T {
        T::one()
    }
}
impl<T: Clone + Mul<Output = T>> Associativity for Multiplicative<T> {}
impl<T: Clone + Mul<Output = T>> Commutativity for Multiplicative<T> {}

impl<T: Ord + Clone> Magma for Min<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.min(rhs).clone()
    }
}
impl<T: Ord + Clone + HasMax> Identity for Min<T> {
    fn e(&self) -> T {
        T::max_value()
    }
}
impl<T: Ord + Clone> Associativity for Min<T> {}
impl<T: Ord + Clone> Commutativity for Min<T> {}
impl<T: Ord + Clone> Idempotence for Min<T> {}

impl<T: Ord + Clone> Magma for Max<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.max(rhs).clone()
    }
}
impl<T: Ord + Clone + HasMin> Identity for Max<T> {
    fn e(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + Clone> Associativity for Max<T> {}
impl<T: Ord + Clone> Commutativity for Max<T> {}
impl<T: Ord + Clone> Idempotence for Max<T> {}

// (値, 位置)の辞書順で比べるので, 同じ値なら位置の小さい方が残る
impl<T: Ord + Clone> Magma for MinIndex<T> {
    type T = (T, usize);
    fn op(&self, lhs: &(T, usize), rhs: &(T, usize)) -> (T, usize) {
        lhs.min(rhs).clone()
    }
}
impl<T: Ord + Clone + HasMax> Identity for MinIndex<T> {
    fn e(&self) -> (T, usize) {
        (T::max_value(), usize::MAX)
    }
}
impl<T: Ord + Clone> Associativity for MinIndex<T> {}
impl<T: Ord + Clone> Commutativity for MinIndex<T> {}
impl<T: Ord + Clone> Idempotence for MinIndex<T> {}

impl<T: Clone + PartialEq + HasZero + Rem<Output = T>> Magma for Gcd<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        let mut a = lhs.clone();
        let mut b = rhs.clone();
        while b != T::zero() {
            let r = a % b.clone();
            a = b;
            b = r;
        }
        a
    }
}
impl<T: Clone + PartialEq + HasZero + Rem<Output = T>> Identity for Gcd<T> {
    fn e(&self) -> T {
        T::zero()
    }
}
impl<T: Clone + PartialEq + HasZero + Rem<Output = T>> Associativity for Gcd<T> {}
impl<T: Clone + PartialEq + HasZero + Rem<Output = T>> Commutativity for Gcd<T> {}
impl<T: Clone + PartialEq + HasZero + Rem<Output = T>> Idempotence for Gcd<T> {}

/// `x`を`n`個足した値を求める
///
/// # Time complexity
///
/// - *O*(log *n*)
fn repeat<T: Clone + Add<Output = T> + HasZero>(x: &T, mut n: usize) -> T {
    let mut acc = T::zero();
    let mut base = x.clone();
    while n > 0 {
        if n & 1 == 1 {
            acc = acc + base.clone();
        }
        n >>= 1;
        if n > 0 {
            base = base.clone() + base;
        }
    }
    acc
}

impl<T: Clone + Add<Output = T>> Magma for RangeAddSum<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}
impl<T: Clone + Add<Output = T> + HasZero> Identity for RangeAddSum<T> {
    fn e(&self) -> T {
        T::zero()
    }
}
impl<T: Clone + Add<Output = T>> Associativity for RangeAddSum<T> {}
impl<T: Clone + Add<Output = T> + HasZero> LazyMonoid for RangeAddSum<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, g: &T, f: &T) -> T {
        g.clone() + f.clone()
    }
    fn map(&self, f: &T, x: &T, len: usize) -> T {
        x.clone() + repeat(f, len)
    }
}

impl<T: Ord + Clone> Magma for RangeAddMin<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.min(rhs).clone()
    }
}
impl<T: Ord + Clone + HasMax> Identity for RangeAddMin<T> {
    fn e(&self) -> T {
        T::max_value()
    }
}
impl<T: Ord + Clone> Associativity for RangeAddMin<T> {}
impl<T: Ord + Clone + Add<Output = T> + HasZero + HasMax> LazyMonoid for RangeAddMin<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, g: &T, f: &T) -> T {
        g.clone() + f.clone()
    }
    // 単位元は「要素なし」を表すので加算しない
    fn map(&self, f: &T, x: &T, _len: usize) -> T {
        if *x == T::max_value() {
            x.clone()
        } else {
            x.clone() + f.clone()
        }
    }
}

impl<T: Ord + Clone> Magma for RangeAddMax<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.max(rhs).clone()
    }
}
impl<T: Ord + Clone + HasMin> Identity for RangeAddMax<T> {
    fn e(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + Clone> Associativity for RangeAddMax<T> {}
impl<T: Ord + Clone + Add<Output = T> + HasZero + HasMin> LazyMonoid for RangeAddMax<T> {
    type F = T;
    fn id(&self) -> T {
        T::zero()
    }
    fn comp(&self, g: &T, f: &T) -> T {
        g.clone() + f.clone()
    }
    fn map(&self, f: &T, x: &T, _len: usize) -> T {
        if *x == T::min_value() {
            x.clone()
        } else {
            x.clone() + f.clone()
        }
    }
}

impl<T: Clone + Add<Output = T>> Magma for RangeAssignSum<T> {
    type T = T;
    fn op(&self, lhs: &T, rhs: &T) -> T {
        lhs.clone() + rhs.clone()
    }
}
impl<T: Clone + Add<Output = T> + HasZero> Identity for RangeAssignSum<T> {
    fn e(&self) -> T {
        T::zero()
    }
}
impl<T: Clone + Add<Output = T>> Associativity for RangeAssignSum<T> {}
impl<T: Clone + Add<Output = T> + HasZero> LazyMonoid for RangeAssignSum<T> {
    type F = Option<T>;
    fn id(&self) -> Option<T> {
        None
    }
    fn comp(&self, g: &Option<T>, f: &Option<T>) -> Option<T> {
        g.as_ref().or(f.as_ref()).cloned()
    }
    fn map(&self, f: &Option<T>, x: &T, len: usize) -> T {
        match f {
            Some(v) => repeat(v, len),
            None => x.clone(),
        }
    }
}

/// 集約の演算`A`と, それに分配的な更新の演算`U`の組から作るLazyMonoid
///
/// 更新値と集約値は同じ型で, 更新は`U::op(x, f)`で作用する. 作用素の合成も`U`で行う.
/// 更新が区間の長さに依存しない組(和と乗算, 最小値と加算など)に使う.
///
/// # Constraints
///
/// `a: A`, `u: U`について
///
/// - 任意の`x`, `y`, `z`について`u.op(&a.op(&x, &y), &z) == a.op(&u.op(&x, &z), &u.op(&y, &z))`
/// - `U`は結合律を満たし単位元を持つ
#[derive(Clone, Copy, Default, Debug)]
pub struct Distributive<A, U>(pub A, pub U);

impl<A: Magma, U: Magma<T = A::T>> Magma for Distributive<A, U> {
    type T = A::T;
    fn op(&self, lhs: &A::T, rhs: &A::T) -> A::T {
        self.0.op(lhs, rhs)
    }
}
impl<A: Identity, U: Magma<T = A::T>> Identity for Distributive<A, U> {
    fn e(&self) -> A::T {
        self.0.e()
    }
}
impl<A: Associativity, U: Magma<T = A::T>> Associativity for Distributive<A, U> {}
impl<A, U> LazyMonoid for Distributive<A, U>
where
    A: Associativity + Identity,
    U: Associativity + Identity<T = A::T>,
{
    type F = A::T;
    fn id(&self) -> A::T {
        self.1.e()
    }
    // 先に溜まっていた`f`の後に`g`を適用する
    fn comp(&self, g: &A::T, f: &A::T) -> A::T {
        self.1.op(f, g)
    }
    fn map(&self, f: &A::T, x: &A::T, _len: usize) -> A::T {
        self.1.op(x, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ops() {
        let add = Additive::<i64>::new();
        assert_eq!(add.op(&3, &4), 7);
        assert_eq!(add.e(), 0);
        assert_eq!(add.inv(&5), -5);
        assert_eq!(add.opinv(&9, &4), 5);

        let add = Additive::<u32>::new();
        assert_eq!(add.opinv(&9, &4), 5);

        let mul = Multiplicative::<i32>::new();
        assert_eq!(mul.op(&3, &4), 12);
        assert_eq!(mul.e(), 1);

        assert_eq!(Min::<i32>::new().op(&3, &-4), -4);
        assert_eq!(Min::<i32>::new().e(), i32::MAX);
        assert_eq!(Max::<u8>::new().op(&3, &4), 4);
        assert_eq!(Max::<u8>::new().e(), 0);
    }

    #[test]
    fn min_index_prefers_left() {
        let m = MinIndex::<i32>::new();
        assert_eq!(m.op(&(1, 3), &(1, 1)), (1, 1));
        assert_eq!(m.op(&(1, 1), &(1, 3)), (1, 1));
        assert_eq!(m.op(&(0, 9), &(1, 1)), (0, 9));
        assert_eq!(m.op(&m.e(), &(5, 2)), (5, 2));
    }

    #[test]
    fn gcd() {
        let g = Gcd::<u64>::new();
        assert_eq!(g.op(&12, &18), 6);
        assert_eq!(g.op(&18, &12), 6);
        assert_eq!(g.op(&7, &7), 7);
        assert_eq!(g.op(&g.e(), &15), 15);
        assert_eq!(g.op(&15, &g.e()), 15);
    }

    #[test]
    fn repeat_add() {
        assert_eq!(repeat(&5i64, 0), 0);
        assert_eq!(repeat(&5i64, 1), 5);
        assert_eq!(repeat(&5i64, 3), 15);
        assert_eq!(repeat(&-2i32, 1000), -2000);
    }

    #[test]
    fn lazy_ops() {
        let m = RangeAddSum::<i64>::new();
        assert_eq!(m.map(&5, &10, 3), 25);
        assert_eq!(m.comp(&2, &3), 5);
        assert_eq!(m.map(&m.id(), &10, 3), 10);

        let m = RangeAddMin::<i32>::new();
        assert_eq!(m.map(&5, &10, 3), 15);
        assert_eq!(m.map(&5, &i32::MAX, 3), i32::MAX);

        let m = RangeAddMax::<i32>::new();
        assert_eq!(m.map(&-5, &10, 3), 5);
        assert_eq!(m.map(&5, &i32::MIN, 3), i32::MIN);

        let m = RangeAssignSum::<i64>::new();
        assert_eq!(m.map(&Some(4), &100, 3), 12);
        assert_eq!(m.map(&None, &100, 3), 100);
        assert_eq!(m.comp(&Some(1), &Some(2)), Some(1));
        assert_eq!(m.comp(&None, &Some(2)), Some(2));
    }

    #[test]
    fn distributive_sum_mul() {
        let m = Distributive(Additive::<i64>::new(), Multiplicative::<i64>::new());
        assert_eq!(m.op(&2, &3), 5);
        assert_eq!(m.e(), 0);
        assert_eq!(m.id(), 1);
        assert_eq!(m.comp(&3, &2), 6);
        assert_eq!(m.map(&3, &5, 7), 15);
    }
}
