use std::fmt::Debug;

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A reactive value that can be watched for changes.
///
/// Every clone shares the same underlying value. Writers are serialized by
/// the channel, so a read-modify-write through [`Property::update`] never
/// interleaves with another writer.
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value, notifying watchers only if it changed.
    pub(crate) fn set(&self, new_value: T)
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current != new_value {
                *current = new_value;
                true
            } else {
                false
            }
        });
    }

    /// Mutate the value in place and return what the closure returned.
    ///
    /// Watchers are notified only when the value differs afterwards.
    #[allow(clippy::unreachable, clippy::missing_panics_doc)]
    pub(crate) fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> R
    where
        T: PartialEq,
    {
        let mut output = None;
        self.tx.send_if_modified(|current| {
            let before = current.clone();
            output = Some(mutate(current));
            *current != before
        });

        match output {
            Some(value) => value,
            None => unreachable!("send_if_modified always runs its closure"),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Watch for changes to this property.
    ///
    /// The stream immediately yields the current value, then yields
    /// whenever the value changes.
    pub fn watch(&self) -> impl Stream<Item = T> + Send + 'static {
        WatchStream::new(self.tx.subscribe())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
