//! Left-to-right / right-to-left direction preferences for documents in a note-taking host.

pub mod app;
