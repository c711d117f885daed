use crate::error::{Error, Result};
use crate::ops::MinIndex;
use crate::util::{check_index, resolve_range, IdempotentBand};

/// 区間最小値クエリなどを定数時間で処理できるデータ構造
///
/// `self.0[k][i]`は区間`i..i + (1 << k)`の総積を持つ. 構築後は変更できない.
#[derive(Clone)]
pub struct SparseTable<M: IdempotentBand>(Box<[Box<[M::T]>]>, M);

impl<M: IdempotentBand> SparseTable<M>
where
    M::T: Clone,
{
    /// 列からSparseTableを構築する
    ///
    /// # Time complexity
    ///
    /// - *O*(*N* log *N*)
    #[must_use]
    pub fn new(band: M, items: impl Into<Vec<M::T>>) -> Self {
        let items: Vec<M::T> = items.into();
        let len = items.len();
        let mut table = vec![items.into_boxed_slice()];
        let mut span = 1;
        while span * 2 <= len {
            let prev = &table[table.len() - 1];
            let row = (0..=len - span * 2)
                .map(|i| band.op(&prev[i], &prev[i + span]))
                .collect();
            table.push(row);
            span *= 2;
        }
        log::trace!("built sparse table: len = {len}, levels = {}", table.len());
        Self(table.into_boxed_slice(), band)
    }

    /// 列の長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0[0].len()
    }

    /// 列が空かどうか調べる
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `index`番目の要素を返す
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`]を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn get(&self, index: usize) -> Result<&M::T> {
        check_index(index, self.len())?;
        Ok(&self.0[0][index])
    }

    /// `range`の範囲の総積を計算する
    ///
    /// 長さ`2^k`の2つの区間で`range`を覆い, 重なった部分は冪等性により打ち消される.
    ///
    /// # Errors
    ///
    /// - `range`が`0..self.len()`に含まれない区間のとき[`Error::RangeOutOfBounds`]を返す.
    /// - `range`が空のとき[`Error::EmptyRange`]を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn query(&self, range: impl std::ops::RangeBounds<usize>) -> Result<M::T> {
        let (left, right) = resolve_range(range, self.len())?;
        if left == right {
            log::debug!("rejected empty range at {left}");
            return Err(Error::EmptyRange { start: left });
        }
        let diff = right - left;
        let log = diff.ilog2() as usize;
        let row = &self.0[log];
        if diff.is_power_of_two() {
            return Ok(row[left].clone());
        }
        Ok(self.1.op(&row[left], &row[right - (1 << log)]))
    }
}

impl<T: Ord + Clone> SparseTable<MinIndex<T>> {
    /// 値の列から, 区間最小値とその位置を求めるSparseTableを構築する
    ///
    /// # Time complexity
    ///
    /// - *O*(*N* log *N*)
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<(T, usize)> = values.into_iter().zip(0..).collect();
        Self::new(MinIndex::new(), items)
    }

    /// 閉区間`left..=right`の最小値と, それを取る最も左の位置を返す
    ///
    /// # Errors
    ///
    /// `left > right`または`right >= self.len()`のとき[`Error::RangeOutOfBounds`]を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn rmq(&self, left: usize, right: usize) -> Result<(T, usize)> {
        self.query(left..=right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Gcd, Max};
    use crate::util::{Associativity, Idempotence, Magma};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn bitwise_or() {
        struct Or;
        impl Magma for Or {
            type T = u8;
            fn op(&self, a: &u8, b: &u8) -> u8 {
                a | b
            }
        }
        impl Associativity for Or {}
        impl Idempotence for Or {}

        let bits = [0b0001, 0b0010, 0b0000, 0b0100, 0b0001, 0b1000, 0b0000];
        let table = SparseTable::new(Or, bits);
        assert_eq!(table.query(0..1), Ok(0b0001));
        assert_eq!(table.query(2..5), Ok(0b0101));
        assert_eq!(table.query(1..=5), Ok(0b1111));
        assert_eq!(table.query(6..), Ok(0));
        assert_eq!(table.query(..), Ok(0b1111));
        assert_eq!(table.query(4..4), Err(Error::EmptyRange { start: 4 }));
    }

    #[test]
    fn min_index_ties() {
        let table = SparseTable::from_values([2, 0, 5, 0, 0, 3, 0]);
        assert_eq!(table.query(..), Ok((0, 1)));
        assert_eq!(table.query(2..), Ok((0, 3)));
        assert_eq!(table.query(4..=6), Ok((0, 4)));
        assert_eq!(table.query(5..6), Ok((3, 5)));
        assert_eq!(table.query(..1), Ok((2, 0)));
    }

    #[test]
    fn rmq_leftmost() {
        let table = SparseTable::from_values([3, 1, 4, 1, 5]);
        assert_eq!(table.rmq(0, 4), Ok((1, 1)));
        assert_eq!(table.rmq(3, 4), Ok((1, 3)));
        assert_eq!(table.rmq(2, 2), Ok((4, 2)));
        assert_eq!(table.rmq(1, 3), Ok((1, 1)));
        assert_eq!(table.get(4), Ok(&(5, 4)));
        assert_eq!(
            table.rmq(2, 5),
            Err(Error::RangeOutOfBounds {
                start: 2,
                end: 6,
                len: 5
            })
        );
        assert_eq!(
            table.rmq(3, 1),
            Err(Error::RangeOutOfBounds {
                start: 3,
                end: 2,
                len: 5
            })
        );
    }

    #[test]
    fn other_bands() {
        let table = SparseTable::new(Max::<i64>::new(), vec![2, 7, 1, 8, 2, 8, 1, 8]);
        assert_eq!(table.query(..3), Ok(7));
        assert_eq!(table.query(4..7), Ok(8));

        let table = SparseTable::new(Gcd::<u64>::new(), vec![12, 18, 30, 7, 14]);
        assert_eq!(table.query(..3), Ok(6));
        assert_eq!(table.query(3..), Ok(7));
        assert_eq!(table.query(..), Ok(1));
    }

    #[test]
    fn empty() {
        let table = SparseTable::from_values(Vec::<i32>::new());
        assert!(table.is_empty());
        assert_eq!(table.query(..), Err(Error::EmptyRange { start: 0 }));
        assert!(table.rmq(0, 0).is_err());
    }

    #[test]
    fn random_all_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 1..50 {
            let values: Vec<u8> = (0..n).map(|_| rng.gen_range(0..8)).collect();
            let table = SparseTable::from_values(values.iter().copied());
            for l in 0..n {
                for r in l..n {
                    let expected = (l..=r).map(|i| (values[i], i)).min();
                    assert_eq!(table.rmq(l, r).ok(), expected);
                }
            }
        }
    }

    proptest! {
        #[test]
        fn matches_brute_force(
            (values, l, r) in (1usize..200).prop_flat_map(|n| (
                proptest::collection::vec(-20i32..20, n),
                0..n,
                0..n,
            ))
        ) {
            let (l, r) = (l.min(r), l.max(r));
            let table = SparseTable::from_values(values.clone());
            let min = *values[l..=r].iter().min().unwrap();
            let pos = (l..=r).find(|&i| values[i] == min).unwrap();
            prop_assert_eq!(table.rmq(l, r), Ok((min, pos)));
        }
    }
}
