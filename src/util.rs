use crate::error::{Error, Result};

/// 「0」に相当する値が存在することを表すトレイト
pub trait HasZero {
    /// 0の値を返す
    fn zero() -> Self;
}
/// 「1」に相当する値が存在することを表すトレイト
pub trait HasOne {
    /// 1の値を返す
    fn one() -> Self;
}
/// その型に最小値が存在することを表すトレイト
pub trait HasMin {
    /// その型が取り得る最も小さい値を返す
    fn min_value() -> Self;
}
/// その型に最大値が存在することを表すトレイト
pub trait HasMax {
    /// その型が取り得る最も大きい値を返す
    fn max_value() -> Self;
}

/// 整数型にHasZero, HasOne, HasMin, HasMaxを実装するマクロ
macro_rules! impl_zero {
    ($($t: ty),*) => {$(
        impl HasZero for $t {
            fn zero() -> $t { 0 }
        }
        impl HasOne for $t {
            fn one() -> $t { 1 }
        }
        impl HasMin for $t {
            fn min_value() -> $t { Self::MIN }
        }
        impl HasMax for $t {
            fn max_value() -> $t { Self::MAX }
        }
    )*};
}

impl_zero! { u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }

/// マグマ. 二項演算で閉じている代数構造
///
/// 演算は値ではなく演算を表すオブジェクトに持たせる. 単位元などの定数も同じオブジェクトが返す.
pub trait Magma {
    /// マグマの元の型
    type T;
    /// 二項演算
    fn op(&self, lhs: &Self::T, rhs: &Self::T) -> Self::T;
}

/// マグマに単位元があることを表すトレイト
pub trait Identity: Magma<T: Clone> {
    /// 単位元を構築して返す
    ///
    /// 任意の`x`について`self.op(&x, &self.e()) == x`を満たす
    fn e(&self) -> Self::T;
}

/// マグマの全ての元が逆元を持つことを表すトレイト
pub trait Inverse: Magma {
    /// 逆元を返す
    fn inv(&self, v: &Self::T) -> Self::T;

    /// self.op(lhs, &self.inv(rhs)) と同じ
    ///
    /// 逆元を経由しない方が都合の良い型(符号なし整数の減算など)では上書きしてよい.
    fn opinv(&self, lhs: &Self::T, rhs: &Self::T) -> Self::T {
        self.op(lhs, &self.inv(rhs))
    }
}

/// マグマが結合律が成り立つことを表すトレイト
pub trait Associativity: Magma {}
/// マグマが交換則が成り立つことを表すトレイト
pub trait Commutativity: Magma {}
/// マグマが冪等則が成り立つことを表すトレイト
pub trait Idempotence: Magma {}

/// モノイド. 結合律が成り立ち, 単位元を持つ
pub trait Monoid: Associativity + Identity {}
impl<T: Associativity + Identity> Monoid for T {}

/// アーベル群. 全ての元が逆元を持つ可換なモノイド
pub trait AbelianGroup: Monoid + Inverse + Commutativity {}
impl<T: Monoid + Inverse + Commutativity> AbelianGroup for T {}

/// 冪等な半群(バンド)
///
/// 任意の`x`について`self.op(&x, &x) == x`を満たす必要がある. 単位元は要らない.
pub trait IdempotentBand: Associativity + Idempotence {}
impl<T: Associativity + Idempotence> IdempotentBand for T {}

/// `range`を長さ`len`の列の上の半開区間`(left, right)`に直す
///
/// # Errors
///
/// `left > right`または`right > len`のとき[`Error::RangeOutOfBounds`]を返す.
pub(crate) fn resolve_range(
    range: impl std::ops::RangeBounds<usize>,
    len: usize,
) -> Result<(usize, usize)> {
    let left = match range.start_bound() {
        std::ops::Bound::Included(&i) => i,
        std::ops::Bound::Excluded(&i) => i.saturating_add(1),
        std::ops::Bound::Unbounded => 0,
    };
    let right = match range.end_bound() {
        std::ops::Bound::Included(&i) => i.saturating_add(1),
        std::ops::Bound::Excluded(&i) => i,
        std::ops::Bound::Unbounded => len,
    };
    if left > right || right > len {
        log::debug!("rejected range {left}..{right} (len = {len})");
        return Err(Error::RangeOutOfBounds {
            start: left,
            end: right,
            len,
        });
    }
    Ok((left, right))
}

/// `index < len`であるか調べる
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        log::debug!("rejected index {index} (len = {len})");
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        assert_eq!(resolve_range(.., 5), Ok((0, 5)));
        assert_eq!(resolve_range(1..=3, 5), Ok((1, 4)));
        assert_eq!(resolve_range(2..2, 5), Ok((2, 2)));
        assert_eq!(resolve_range(5.., 5), Ok((5, 5)));
        assert_eq!(
            resolve_range(0..=5, 5),
            Err(Error::RangeOutOfBounds {
                start: 0,
                end: 6,
                len: 5
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = resolve_range(3..1, 5);
        assert_eq!(
            reversed,
            Err(Error::RangeOutOfBounds {
                start: 3,
                end: 1,
                len: 5
            })
        );
        assert!(resolve_range(0..=usize::MAX, 5).is_err());
    }

    #[test]
    fn indices() {
        assert_eq!(check_index(4, 5), Ok(()));
        assert_eq!(
            check_index(5, 5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(check_index(0, 0).is_err());
    }
}
