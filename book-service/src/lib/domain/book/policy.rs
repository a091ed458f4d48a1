//! Authorization policy for book operations.
//!
//! Pure decision functions over the caller's account type and the resource's
//! ownership. No I/O, total over their inputs; callers translate `false` into
//! a forbidden outcome after they have established the resource exists.

use crate::domain::book::models::Book;
use crate::domain::user::models::AccountType;
use crate::domain::user::models::User;

/// Only author accounts may create books.
pub fn can_create_book(caller: &User) -> bool {
    caller.account_type == AccountType::Author
}

/// Only the owning author may update or delete a book.
///
/// The account type is irrelevant here: a reader can never own a book in the
/// first place because creation is gated by [`can_create_book`].
pub fn can_mutate_book(caller: &User, book: &Book) -> bool {
    book.author_id == caller.id
}
