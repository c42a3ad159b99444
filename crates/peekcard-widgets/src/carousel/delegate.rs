#![forbid(unsafe_code)]

//! Item rendering delegates.

/// Renders card interiors and reports mark state for items of type `T`.
///
/// The carousel never inspects items itself; everything it shows comes
/// through this trait.
pub trait ItemDelegate<T> {
    /// Card interior for `item`.
    ///
    /// Every line must fit within `inner_width` visible columns. The carousel
    /// does not wrap or truncate the result, so overlong lines widen the card.
    /// The string may contain newlines and escape sequences but should not end
    /// with a newline.
    fn render(&self, item: &T, inner_width: usize) -> String;

    /// Whether `item` has been marked (saved, completed, ...).
    fn is_marked(&self, item: &T) -> bool;
}

impl<T, D: ItemDelegate<T> + ?Sized> ItemDelegate<T> for &D {
    fn render(&self, item: &T, inner_width: usize) -> String {
        (**self).render(item, inner_width)
    }

    fn is_marked(&self, item: &T) -> bool {
        (**self).is_marked(item)
    }
}

impl<T, D: ItemDelegate<T> + ?Sized> ItemDelegate<T> for Box<D> {
    fn render(&self, item: &T, inner_width: usize) -> String {
        (**self).render(item, inner_width)
    }

    fn is_marked(&self, item: &T) -> bool {
        (**self).is_marked(item)
    }
}

/// A delegate built from a pair of closures.
///
/// ```
/// use peekcard_widgets::carousel::{FnDelegate, ItemDelegate};
///
/// let delegate = FnDelegate::new(
///     |name: &String, _w| name.clone(),
///     |name: &String| name.starts_with('*'),
/// );
/// assert!(delegate.is_marked(&"*done".to_string()));
/// assert_eq!(delegate.render(&"todo".to_string(), 10), "todo");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnDelegate<R, M> {
    render: R,
    is_marked: M,
}

impl<R, M> FnDelegate<R, M> {
    /// Wrap a render closure and a mark predicate.
    pub fn new<T>(render: R, is_marked: M) -> Self
    where
        R: Fn(&T, usize) -> String,
        M: Fn(&T) -> bool,
    {
        Self { render, is_marked }
    }
}

impl<T, R, M> ItemDelegate<T> for FnDelegate<R, M>
where
    R: Fn(&T, usize) -> String,
    M: Fn(&T) -> bool,
{
    fn render(&self, item: &T, inner_width: usize) -> String {
        (self.render)(item, inner_width)
    }

    fn is_marked(&self, item: &T) -> bool {
        (self.is_marked)(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl ItemDelegate<&'static str> for Upper {
        fn render(&self, item: &&'static str, inner_width: usize) -> String {
            item.to_uppercase().chars().take(inner_width).collect()
        }

        fn is_marked(&self, item: &&'static str) -> bool {
            item.len() > 3
        }
    }

    fn render_through<D: ItemDelegate<&'static str>>(d: D, item: &'static str) -> String {
        d.render(&item, 3)
    }

    #[test]
    fn borrowed_delegate_forwards() {
        let upper = Upper;
        assert_eq!(render_through(&upper, "abcdef"), "ABC");
        assert!((&upper).is_marked(&"abcd"));
    }

    #[test]
    fn boxed_trait_object_forwards() {
        let boxed: Box<dyn ItemDelegate<&'static str>> = Box::new(Upper);
        assert_eq!(render_through(boxed, "xy"), "XY");
    }

    #[test]
    fn closures_as_delegate() {
        let d = FnDelegate::new(|n: &u32, w| format!("{n:>w$}"), |n: &u32| n % 2 == 0);
        assert_eq!(d.render(&7, 3), "  7");
        assert!(d.is_marked(&4));
        assert!(!d.is_marked(&5));
    }
}
