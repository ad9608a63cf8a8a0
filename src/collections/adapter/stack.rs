use std::{
    collections::{LinkedList, VecDeque},
    fmt,
    io::{self, Write},
    marker::PhantomData,
};

use crate::collections::adapter::{ContainerCommon, OutOfRangeError};

pub trait StackLike<T>: ContainerCommon {
    fn push(&mut self, value: T);

    fn pop(&mut self) -> Option<T>;

    fn top(&self) -> Option<&T>;

    fn top_mut(&mut self) -> Option<&mut T>;

    fn clear(&mut self);

    /// Most recently pushed element first.
    fn iter_from_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// LIFO adapter over any [`StackLike`] backend.
///
/// Text rendering, [`Stack::write_to`] and [`Stack::save`] all walk the
/// elements from top to bottom.
pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::with_container(Vec::new())
    }
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
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
    pub fn push(&mut self, value: T) {
        self.container.push(value)
    }

    #[inline]
    pub fn pop(&mut self) -> Result<T, OutOfRangeError> {
        self.container.pop().ok_or(OutOfRangeError::stack("pop"))
    }

    #[inline]
    pub fn top(&self) -> Result<&T, OutOfRangeError> {
        self.container.top().ok_or(OutOfRangeError::stack("top"))
    }

    #[inline]
    pub fn top_mut(&mut self) -> Result<&mut T, OutOfRangeError> {
        self.container.top_mut().ok_or(OutOfRangeError::stack("top_mut"))
    }

    #[inline]
    pub fn clear(&mut self) {
        self.container.clear()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.container.iter_from_top()
    }
}

impl<T: fmt::Display, Container: StackLike<T>> Stack<T, Container> {
    /// One element per line, top first.
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

    use super::{Stack, StackLike};
    use crate::persist::{self, PersistError};

    impl<T: Display, Container: StackLike<T>> Stack<T, Container> {
        /// Writes the elements top to bottom, one per line.
        pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
            persist::save_lines(path, self.iter())
        }
    }

    impl<T, Container> Stack<T, Container>
    where
        T: FromStr,
        T::Err: Display,
        Container: StackLike<T>,
    {
        /// Replaces the contents with a file written by [`Stack::save`].
        ///
        /// The stack is left untouched if the file cannot be read or parsed.
        pub fn restore(&mut self, path: impl AsRef<Path>) -> Result<(), PersistError> {
            let values = persist::restore_lines::<T>(path)?;
            self.container.clear();
            values
                .into_iter()
                .rev()
                .for_each(|value| self.container.push(value));
            Ok(())
        }
    }
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::with_container(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::with_container(Default::default())
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    #[inline]
    fn clone(&self) -> Self {
        Self::with_container(self.container.clone())
    }
}

impl<T, Container: StackLike<T> + PartialEq> PartialEq for Stack<T, Container> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, Container: StackLike<T> + Eq> Eq for Stack<T, Container> {}

impl<T, Container: StackLike<T> + fmt::Debug> fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

/// Elements top to bottom, separated by a single space.
impl<T: fmt::Display, Container: StackLike<T>> fmt::Display for Stack<T, Container> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            iter.try_for_each(|value| write!(f, " {value}"))?;
        }
        Ok(())
    }
}

impl<T, Container: StackLike<T> + Default> FromIterator<T> for Stack<T, Container> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::default();
        stack.extend(iter);
        stack
    }
}

impl<T, Container: StackLike<T>> Extend<T> for Stack<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.container.push(value));
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T> StackLike<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter().rev()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter().rev()
    }
}

impl<T> StackLike<T> for LinkedList<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn top_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn iter_from_top<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter().rev()
    }
}
