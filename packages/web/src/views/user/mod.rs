mod details;
pub use details::UserDetails;

mod search;
pub use search::UserSearch;
