//! Single-threaded observable values.
//!
//! A [`Signal`] holds the latest value of one input and notifies its
//! subscribers synchronously whenever the value is replaced. Readers always
//! see the most recent value; nothing is queued.

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
}

pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
    subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

impl<T: Clone + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { value, version: 0 })),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Number of times the value has been replaced.
    #[inline]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Replace the value and notify subscribers.
    ///
    /// Subscribers may read this signal (and others) while being notified.
    /// A subscriber registered during notification first hears about the
    /// next change.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.version += 1;
        }
        let mut running = std::mem::take(&mut *self.subscribers.borrow_mut());
        for sub in running.iter_mut() {
            sub(&value);
        }
        let mut subs = self.subscribers.borrow_mut();
        let added = std::mem::replace(&mut *subs, running);
        subs.extend(added);
    }

    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscriber_sees_every_value() {
        let s = Signal::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = seen.clone();
        s.subscribe(move |v| seen2.borrow_mut().push(*v));
        s.set(2);
        s.set(3);
        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(s.get(), 3);
        assert_eq!(s.version(), 2);
    }

    #[test]
    fn subscriber_can_read_and_subscribe_during_notify() {
        let s = Signal::new(0);
        let s2 = s.clone();
        let late = Rc::new(Cell::new(0));
        let late2 = late.clone();
        s.subscribe(move |v| {
            assert_eq!(s2.get(), *v);
            let late3 = late2.clone();
            s2.subscribe(move |_| late3.set(late3.get() + 1));
        });
        s.set(1);
        assert_eq!(late.get(), 0);
        s.set(2);
        assert_eq!(late.get(), 1);
    }
}
