use crate::error::Result;
use crate::util::{check_index, resolve_range, Monoid};

/// 作用素付きモノイド
///
/// 作用素`F`は`map`によってモノイドの元に作用する. `map`には作用させる区間に含まれる要素数も渡される.
///
/// # Constraints
///
/// - `self.map(&f, &self.op(&x, &y), a + b) == self.op(&self.map(&f, &x, a), &self.map(&f, &y, b))`
/// - `self.map(&self.comp(&g, &f), &x, n) == self.map(&g, &self.map(&f, &x, n), n)`
/// - `self.map(&self.id(), &x, n) == x`
pub trait LazyMonoid: Monoid {
    /// 作用素の型
    type F: Clone;

    /// 恒等写像を返す
    fn id(&self) -> Self::F;
    /// `f`を作用させた後に`g`を作用させる作用素を返す
    fn comp(&self, g: &Self::F, f: &Self::F) -> Self::F;
    /// 長さ`len`の区間の総積`x`に`f`を作用させる
    fn map(&self, f: &Self::F, x: &Self::T, len: usize) -> Self::T;
}

/// 遅延伝搬セグメントツリー
///
/// 区間への作用素の適用と区間の総積の計算ができる.
/// 各頂点は部分木の総積と, まだ子に伝搬していない作用素を持つ.
/// 頂点の総積には自身の作用素は含まれない.
#[derive(Clone)]
pub struct LazySegmentTree<M: LazyMonoid>(Box<[M::T]>, Box<[M::F]>, usize, M);

impl<M: LazyMonoid> LazySegmentTree<M> {
    /// 全ての要素が`monoid.e()`で初期化された長さ`n`のLazySegmentTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(monoid: M, n: usize) -> Self {
        let items = (0..n).map(|_| monoid.e()).collect();
        Self::from_vec(monoid, items)
    }

    /// 配列`vec`からLazySegmentTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(monoid: M, vec: Vec<M::T>) -> Self {
        let n = vec.len();
        let nodes = 2 * n.next_power_of_two() - 1;
        let mut tree = Self(
            (0..nodes).map(|_| monoid.e()).collect(),
            (0..nodes).map(|_| monoid.id()).collect(),
            n,
            monoid,
        );
        if n > 0 {
            tree.build(0, 0, n, &mut vec.into_iter());
        }
        log::trace!("built lazy segment tree: len = {n}, nodes = {nodes}");
        tree
    }

    fn build(&mut self, node: usize, lo: usize, hi: usize, items: &mut impl Iterator<Item = M::T>) {
        if hi - lo == 1 {
            if let Some(item) = items.next() {
                self.0[node] = item;
            }
            return;
        }
        let mid = (lo + hi) / 2;
        self.build(2 * node + 1, lo, mid, items);
        self.build(2 * node + 2, mid, hi, items);
        self.0[node] = self.3.op(&self.0[2 * node + 1], &self.0[2 * node + 2]);
    }

    /// 列の長さを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.2
    }

    /// 列が空かどうか判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.2 == 0
    }

    /// 長さ`len`の区間を受け持つ頂点`node`の, 自身の作用素も含めた総積
    fn effective(&self, node: usize, len: usize) -> M::T {
        self.3.map(&self.1[node], &self.0[node], len)
    }

    /// 頂点`node`の作用素を自身の総積に反映させ, 子に伝搬する
    ///
    /// 何度呼んでも各頂点の実際の総積は変わらない.
    fn push(&mut self, node: usize, len: usize) {
        let f = std::mem::replace(&mut self.1[node], self.3.id());
        self.0[node] = self.3.map(&f, &self.0[node], len);
        for child in [2 * node + 1, 2 * node + 2] {
            self.1[child] = self.3.comp(&f, &self.1[child]);
        }
    }

    fn pull(&mut self, node: usize, lo: usize, mid: usize, hi: usize) {
        self.0[node] = self.3.op(
            &self.effective(2 * node + 1, mid - lo),
            &self.effective(2 * node + 2, hi - mid),
        );
    }

    fn apply_inner(
        &mut self,
        node: usize,
        (lo, hi): (usize, usize),
        (left, right): (usize, usize),
        f: &M::F,
    ) {
        if right <= lo || hi <= left {
            return;
        }
        if left <= lo && hi <= right {
            self.1[node] = self.3.comp(f, &self.1[node]);
            return;
        }
        self.push(node, hi - lo);
        let mid = (lo + hi) / 2;
        self.apply_inner(2 * node + 1, (lo, mid), (left, right), f);
        self.apply_inner(2 * node + 2, (mid, hi), (left, right), f);
        self.pull(node, lo, mid, hi);
    }

    fn prod_inner(
        &mut self,
        node: usize,
        (lo, hi): (usize, usize),
        (left, right): (usize, usize),
    ) -> M::T {
        if right <= lo || hi <= left {
            return self.3.e();
        }
        if left <= lo && hi <= right {
            return self.effective(node, hi - lo);
        }
        self.push(node, hi - lo);
        let mid = (lo + hi) / 2;
        let l = self.prod_inner(2 * node + 1, (lo, mid), (left, right));
        let r = self.prod_inner(2 * node + 2, (mid, hi), (left, right));
        self.pull(node, lo, mid, hi);
        self.3.op(&l, &r)
    }

    fn set_inner(&mut self, node: usize, (lo, hi): (usize, usize), index: usize, item: M::T) {
        if hi - lo == 1 {
            self.0[node] = item;
            self.1[node] = self.3.id();
            return;
        }
        self.push(node, hi - lo);
        let mid = (lo + hi) / 2;
        if index < mid {
            self.set_inner(2 * node + 1, (lo, mid), index, item);
        } else {
            self.set_inner(2 * node + 2, (mid, hi), index, item);
        }
        self.pull(node, lo, mid, hi);
    }

    /// 指定した区間に作用素`f`を適用する
    ///
    /// # Errors
    ///
    /// `range`が`0..self.len()`に含まれない区間のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn apply(&mut self, range: impl std::ops::RangeBounds<usize>, f: &M::F) -> Result<()> {
        let (left, right) = resolve_range(range, self.len())?;
        if left == right {
            return Ok(());
        }
        self.apply_inner(0, (0, self.len()), (left, right), f);
        Ok(())
    }

    /// 指定した区間の値の総積を計算する
    ///
    /// 空の区間に対しては`monoid.e()`を返す.
    ///
    /// # Errors
    ///
    /// `range`が`0..self.len()`に含まれない区間のとき[`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn range_query(&mut self, range: impl std::ops::RangeBounds<usize>) -> Result<M::T> {
        let (left, right) = resolve_range(range, self.len())?;
        if left == right {
            return Ok(self.3.e());
        }
        Ok(self.prod_inner(0, (0, self.len()), (left, right)))
    }

    /// 指定した位置の値を変更する
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn set(&mut self, index: usize, item: M::T) -> Result<()> {
        check_index(index, self.len())?;
        self.set_inner(0, (0, self.len()), index, item);
        Ok(())
    }

    /// 指定した位置の値を取得する
    ///
    /// # Errors
    ///
    /// `index >= self.len()`のとき[`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn get(&mut self, index: usize) -> Result<M::T> {
        check_index(index, self.len())?;
        self.range_query(index..=index)
    }
}
