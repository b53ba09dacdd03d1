// ABOUTME: DOM transforms for postpress.
// ABOUTME: head.rs merges JSON-LD and meta tags; restructure.rs rebuilds semantic markup.

pub mod head;
pub mod restructure;
