//! Static site content and the resolver that walks it.

pub mod blog;
pub mod breadcrumb;
pub mod catalog;
pub mod dashboard;
pub mod docs;
pub mod format;
pub mod gallery;
pub mod site;
pub mod tree;
