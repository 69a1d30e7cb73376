use std::cell::RefCell;
use std::future::Future;

/// One lazily populated cache slot.
///
/// The first `get_or_try_init` runs its computation and keeps the value for
/// the lifetime of the owner; later calls hand the stored value back without
/// recomputing. There is no invalidation and no locking: a `Memo` belongs to
/// a single-threaded owner.
pub struct Memo<T> {
    slot: RefCell<Option<T>>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Memo {
            slot: RefCell::new(None),
        }
    }
}

impl<T: Clone> Memo<T> {
    /// Currently stored value, if the slot has been populated.
    pub fn get(&self) -> Option<T> {
        self.slot.borrow().clone()
    }

    /// Return the stored value, or run `compute` and store its result.
    ///
    /// A failing `compute` leaves the slot empty, so the next access runs
    /// it again.
    pub async fn get_or_try_init<F, Fut, E>(&self, compute: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.slot.borrow().as_ref() {
            return Ok(value.clone());
        }

        let value = compute().await?;
        *self.slot.borrow_mut() = Some(value.clone());

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Memo;
    use std::cell::Cell;
    use std::convert::Infallible;

    struct Owner {
        calls: Cell<u32>,
        answer: Memo<u32>,
        other: Memo<String>,
    }

    impl Owner {
        fn new() -> Self {
            Owner {
                calls: Cell::new(0),
                answer: Memo::new(),
                other: Memo::new(),
            }
        }

        async fn answer(&self) -> u32 {
            self.answer
                .get_or_try_init(|| async move {
                    self.calls.set(self.calls.get() + 1);
                    Ok::<_, Infallible>(42)
                })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn computes_once_for_many_accesses() {
        let owner = Owner::new();

        for _ in 0..5 {
            assert_eq!(owner.answer().await, 42);
        }

        assert_eq!(owner.calls.get(), 1);
    }

    #[tokio::test]
    async fn slot_starts_empty_and_fills_on_first_access() {
        let owner = Owner::new();

        assert_eq!(owner.answer.get(), None);
        owner.answer().await;
        assert_eq!(owner.answer.get(), Some(42));
    }

    #[tokio::test]
    async fn slots_on_the_same_owner_do_not_collide() {
        let owner = Owner::new();

        let answer = owner.answer().await;
        let other = owner
            .other
            .get_or_try_init(|| async { Ok::<_, Infallible>("cached".to_string()) })
            .await
            .unwrap();

        assert_eq!(answer, 42);
        assert_eq!(other, "cached");
        assert_eq!(owner.answer.get(), Some(42));
        assert_eq!(owner.other.get(), Some("cached".to_string()));
        assert_eq!(owner.calls.get(), 1);
    }

    #[tokio::test]
    async fn failed_computation_is_retried() {
        let memo: Memo<u32> = Memo::new();
        let calls = Cell::new(0);
        let counter = &calls;

        let first: Result<u32, &str> = memo
            .get_or_try_init(|| async move {
                counter.set(counter.get() + 1);
                Err("unreachable host")
            })
            .await;
        assert!(first.is_err());
        assert_eq!(memo.get(), None);

        let second = memo
            .get_or_try_init(|| async move {
                counter.set(counter.get() + 1);
                Ok::<_, &str>(7)
            })
            .await
            .unwrap();

        assert_eq!(second, 7);
        assert_eq!(calls.get(), 2);
    }
}
