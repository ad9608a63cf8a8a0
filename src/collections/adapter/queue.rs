use std::{
    collections::{LinkedList, VecDeque},
    fmt,
    io::{self, Write},
    marker::PhantomData,
};

use crate::collections::adapter::{ContainerCommon, OutOfRangeError};

pub trait QueueLike<T>: ContainerCommon {
    fn push_back(&mut self, value: T);

    fn pop_front(&mut self) -> Option<T>;

    fn front(&self) -> Option<&T>;

    fn front_mut(&mut self) -> Option<&mut T>;

    fn back(&self) -> Option<&T>;

    fn back_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    /// Oldest element first.
    fn iter_from_front<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// FIFO adapter over any [`QueueLike`] backend.
pub struct Queue<T, Container: QueueLike<T> = VecDeque<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::with_container(VecDeque::new())
    }
}

impl<T, Container: QueueLike<T>> Queue<T, Container> {
    #[inline]
    pub const fn with_container(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.container.push_back(value)
    }

    #[inline]
    pub fn dequeue(&mut self) -> Result<T, OutOfRangeError> {
        self.container.pop_front().ok_or(OutOfRangeError::queue("dequeue"))
    }

    #[inline]
    pub fn front(&self) -> Result<&T, OutOfRangeError> {
        self.container.front().ok_or(OutOfRangeError::queue("front"))
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, OutOfRangeError> {
        self.container.front_mut().ok_or(OutOfRangeError::queue("front_mut"))
    }

    #[inline]
    pub fn back(&self) -> Result<&T, OutOfRangeError> {
        self.container.back().ok_or(OutOfRangeError::queue("back"))
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, OutOfRangeError> {
        self.container.back_mut().ok_or(OutOfRangeError::queue("back_mut"))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.container.clear()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.container.iter_from_front()
    }
}

impl<T: fmt::Display, Container: QueueLike<T>> Queue<T, Container> {
    pub fn write_to(&self, mut out: impl Write) -> io::Result<()> {
        for value in self.iter() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }

    /// Same output as [`Self::write_to`] on stdout; write errors are ignored.
    pub fn print(&self) {
        let _ = self.write_to(io::stdout().lock());
    }
}

#[cfg(feature = "persist")]
mod persistence {
    use std::{fmt::Display, path::Path, str::FromStr};

    use super::{Queue, QueueLike};
    use crate::persist::{self, PersistError};

    impl<T: Display, Container: QueueLike<T>> Queue<T, Container> {
        pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
            persist::save_lines(path, self.iter())
        }
    }

    impl<T, Container> Queue<T, Container>
    where
        T: FromStr,
        T::Err: Display,
        Container: QueueLike<T>,
    {
        /// Replaces the contents with a file written by [`Queue::save`].
        /// On error the queue is unchanged.
        pub fn restore(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
            let values = persist::restore_lines::<T>(path)?;
            self.container.clear();
            values
                .into_iter()
                .for_each(|value| self.container.push_back(value));
            Ok(())
        }
    }
}

impl<T, Container: QueueLike<T>> From<Container> for Queue<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::with_container(value)
    }
}

impl<T, Container: QueueLike<T> + Default> Default for Queue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::with_container(Default::default())
    }
}

impl<T, Container: QueueLike<T> + Clone> Clone for Queue<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::with_container(self.container.clone())
    }
}

impl<T, Container: QueueLike<T> + PartialEq> PartialEq for Queue<T, Container> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, Container: QueueLike<T> + Eq> Eq for Queue<T, Container> {}

impl<T, Container: QueueLike<T> + fmt::Debug> fmt::Debug for Queue<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

impl<T: fmt::Display, Container: QueueLike<T>> fmt::Display for Queue<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            iter.try_for_each(|value| write!(f, " {value}"))?;
        }
        Ok(())
    }
}

impl<T, Container: QueueLike<T> + Default> FromIterator<T> for Queue<T, Container> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<T, Container: QueueLike<T>> Extend<T> for Queue<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.container.push_back(value));
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for Queue<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T> QueueLike<T> for Vec<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        (!self.is_empty()).then(|| self.remove(0))
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.first()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_front<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> QueueLike<T> for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_front<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> QueueLike<T> for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        self.front_mut()
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_front<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        q.enqueue(1);
        assert!(!q.is_empty());
        q.dequeue().unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn test_len() {
        let mut q = Queue::new();
        assert_eq!(q.len(), 0);
        q.enqueue(1);
        assert_eq!(q.len(), 1);
        q.enqueue(2);
        assert_eq!(q.len(), 2);
        q.dequeue().unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_front_back() {
        let mut q = Queue::new();
        q.enqueue(1);
        assert_eq!(q.front(), Ok(&1));
        q.enqueue(2);
        assert_eq!(q.front(), Ok(&1));
        assert_eq!(q.back(), Ok(&2));
        *q.front_mut().unwrap() = 7;
        assert_eq!(q.dequeue(), Ok(7));
    }

    #[test]
    fn test_back_mut() {
        let mut q = Queue::<i32>::new();
        assert_eq!(q.back_mut(), Err(OutOfRangeError::queue("back_mut")));
        q.enqueue(1);
        q.enqueue(2);
        *q.back_mut().unwrap() += 10;
        assert_eq!(q.back(), Ok(&12));
        assert_eq!(q.front(), Ok(&1));

        let mut list = Queue::with_container(LinkedList::from([1]));
        *list.back_mut().unwrap() = 3;
        assert_eq!(list.dequeue(), Ok(3));
    }

    fn front_to_back<Q: QueueLike<i32>>(mut backend: Q) -> Vec<i32> {
        (1..=3).for_each(|i| backend.push_back(i));
        backend.iter_from_front().copied().collect()
    }

    #[test]
    fn test_iter_from_front_backends() {
        assert_eq!(front_to_back(Vec::new()), [1, 2, 3]);
        assert_eq!(front_to_back(VecDeque::new()), [1, 2, 3]);
        assert_eq!(front_to_back(LinkedList::new()), [1, 2, 3]);
    }

    #[test]
    fn test_print() {
        let mut q = Queue::<String>::new();
        q.print();
        q.extend(["A B C".to_string(), "G".to_string()]);
        q.print();
        let mut out = Vec::new();
        q.write_to(&mut out).unwrap();
        assert_eq!(out, b"A B C\nG\n");
    }

    #[test]
    fn test_dequeue() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.dequeue().unwrap();
        assert!(q.is_empty());
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.front(), Ok(&1));
        assert_eq!(q.dequeue(), Ok(1));
        assert_eq!(q.front(), Ok(&2));
        assert_eq!(q.dequeue(), Ok(2));
        assert!(q.is_empty());
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut q = Queue::<i32>::new();
        assert_eq!(q.front(), Err(OutOfRangeError::queue("front")));
        assert!(q.back().is_err());
        assert!(q.front_mut().is_err());
        q.enqueue(1);
        q.enqueue(2);
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        assert_eq!(q.dequeue(), Err(OutOfRangeError::queue("dequeue")));
    }

    #[test]
    fn test_to_string() {
        let mut q = Queue::<i32>::new();
        assert_eq!(q.to_string(), "");
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.to_string(), "1 2");
        q.enqueue(3);
        assert_eq!(q.to_string(), "1 2 3");
    }

    #[test]
    fn test_write_to() {
        let mut q = Queue::<i32>::new();
        let mut out = Vec::new();
        q.write_to(&mut out).unwrap();
        assert!(out.is_empty());

        q.extend([1, 2, 3]);
        q.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
        q.print();
    }

    #[test]
    fn test_clone_is_independent() {
        let mut q1 = Queue::new();
        q1.enqueue(1);
        q1.enqueue(2);
        let mut q2 = q1.clone();
        assert_eq!(q2.front(), Ok(&1));
        q2.dequeue().unwrap();
        assert_eq!(q2.front(), Ok(&2));
        assert_eq!(q1.len(), 2);
        assert_eq!(q1.front(), Ok(&1));
        q1.enqueue(3);
        assert_eq!(q2.len(), 1);
    }

    #[test]
    fn test_backends() {
        let mut by_vec = Queue::with_container(Vec::new());
        let mut list = Queue::with_container(LinkedList::new());
        for i in 1..=3 {
            by_vec.enqueue(i);
            list.enqueue(i);
        }
        assert_eq!(by_vec.dequeue(), Ok(1));
        assert_eq!(list.dequeue(), Ok(1));
        assert_eq!(by_vec.to_string(), "2 3");
        assert_eq!(list.to_string(), "2 3");
        assert_eq!(by_vec.into_inner(), vec![2, 3]);
    }

    #[test]
    fn test_clear() {
        let mut q: Queue<i32> = (1..=3).collect();
        assert_eq!(q.inner(), &VecDeque::from([1, 2, 3]));
        q.clear();
        assert!(q.is_empty());
        assert!(q.front().is_err());
    }

    #[cfg(feature = "persist")]
    #[test]
    fn test_save_restore() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.txt");

        let mut q1 = Queue::new();
        q1.enqueue(1);
        q1.enqueue(2);
        q1.enqueue(3);
        q1.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n3\n");
        let mut q2 = Queue::<i32>::new();
        q2.restore(&path).unwrap();
        assert_eq!(q2.len(), 3);
        while !q1.is_empty() {
            assert_eq!(q1.front(), q2.front());
            q1.dequeue().unwrap();
            q2.dequeue().unwrap();
        }

        let mut sq1 = Queue::new();
        sq1.enqueue("A B C".to_string());
        assert_eq!(sq1.front().unwrap(), "A B C");
        sq1.enqueue("D E F".to_string());
        assert_eq!(sq1.front().unwrap(), "A B C");
        sq1.enqueue("G".to_string());
        assert_eq!(sq1.front().unwrap(), "A B C");
        assert_eq!(sq1.len(), 3);
        sq1.save(&path).unwrap();
        let mut sq2 = Queue::<String>::new();
        sq2.restore(&path).unwrap();
        assert_eq!(sq2.len(), 3);
        while !sq1.is_empty() {
            assert_eq!(sq1.dequeue(), sq2.dequeue());
        }
    }

    #[cfg(feature = "persist")]
    #[test]
    fn test_restore_failure_keeps_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.txt");
        std::fs::write(&path, "1\n\n3\n").unwrap();

        let mut q: Queue<i32> = (1..=3).collect();
        assert!(q.restore(&path).is_err());
        assert_eq!(q.to_string(), "1 2 3");

        std::fs::write(&path, "4\n5\n").unwrap();
        q.restore(&path).unwrap();
        assert_eq!(q.to_string(), "4 5");
    }

    proptest! {
        #[test]
        fn prop_fifo(values: Vec<i32>) {
            let mut q: Queue<i32> = values.iter().copied().collect();
            prop_assert_eq!(q.len(), values.len());
            for expected in values.iter() {
                prop_assert_eq!(q.front(), Ok(expected));
                prop_assert_eq!(q.dequeue(), Ok(*expected));
            }
            prop_assert!(q.is_empty());
            prop_assert!(q.dequeue().is_err());
        }

        #[test]
        fn prop_clone_is_independent(values in prop::collection::vec(any::<u8>(), 0..32), removals in 0usize..8) {
            let original: Queue<u8> = values.iter().copied().collect();
            let mut copy = original.clone();
            for _ in 0..removals {
                let _ = copy.dequeue();
            }
            prop_assert_eq!(original.len(), values.len());
            prop_assert!(original.iter().eq(values.iter()));
            prop_assert_eq!(copy.len(), values.len().saturating_sub(removals));
        }
    }

    #[cfg(feature = "persist")]
    proptest! {
        #[test]
        fn prop_save_restore_round_trip(values in prop::collection::vec("[^\r\n]*", 0..16)) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("queue.txt");
            let q1: Queue<String> = values.into_iter().collect();
            q1.save(&path).unwrap();
            let mut q2 = Queue::<String>::new();
            q2.restore(&path).unwrap();
            prop_assert_eq!(q1, q2);
        }
    }
}
