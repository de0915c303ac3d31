// Interactive demo backing the "financial services AI" showcase page.
// Scripted answers and randomly generated quotes only; no model or market feed
// is involved, and nothing here touches the project catalog.

pub mod handlers;
pub mod market;
pub mod responses;
