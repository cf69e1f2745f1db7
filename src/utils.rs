use crate::{RexError, Tag};
use std::{error::Error as StdError, io};

struct It<'a> {
    curr_source: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for It<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        match self.curr_source {
            None => None,
            Some(err) => {
                let next_src = err.source();
                self.curr_source = next_src;
                Some(err)
            }
        }
    }
}

/// Iterates over `err` followed by its chain of sources.
pub fn error_chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    It {
        curr_source: Some(err),
    }
}

/// Finds the first error of this crate in the chain of `err`. An [`io::Error`] built from a
/// [`RexError`] is looked through, as its `source()` skips the wrapped error.
pub fn find_rex_error(err: &(dyn StdError + 'static)) -> Option<RexError> {
    error_chain(err).find_map(|item| {
        RexError::from_dyn(item).or_else(|| {
            let io_err = item.downcast_ref::<io::Error>()?;
            let inner: &(dyn StdError + 'static) = io_err.get_ref()?;
            RexError::from_dyn(inner)
        })
    })
}

/// True if any error in the chain of `err` carries `tag`.
pub fn chain_has_tag(err: &(dyn StdError + 'static), tag: &Tag) -> bool {
    find_rex_error(err).is_some_and(|rex| rex.has_tag(tag))
}
