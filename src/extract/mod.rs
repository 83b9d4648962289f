// ABOUTME: Extraction module grouping the element accessor and the field extraction rules.
// ABOUTME: Re-exports the pieces the orchestrator fans out over the parsed document.

pub mod fields;
pub mod select;
