use std::sync::Arc;

/// Key wrapper comparing `Arc`s by pointer identity instead of contents.
///
/// Holding the `Arc` keeps the allocation alive, so an address can never
/// be reused by a different value while it is stored as a key.
#[derive(Debug)]
pub struct ByAddress<T: ?Sized>(pub Arc<T>);

impl<T: ?Sized> Clone for ByAddress<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ByAddress<T> {}

/// A single derived value, recomputed only when its input key changes.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the stored value if `key` equals the stored key, otherwise
    /// replace both with `key` and `compute()`.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &mut V {
        let fresh = matches!(&self.slot, Some((stored, _)) if *stored == key);
        if !fresh {
            self.slot = None;
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key, compute()));
        value
    }

    /// Drop the stored value; the next call recomputes.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
