pub mod app;
pub mod contact;
pub mod document;
pub mod events;
pub mod filter;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod notice;
pub mod pages;
pub mod render;
pub mod reveal;
pub mod runtime;
pub mod schedule;
pub mod terminal_guard;
pub mod theme;
pub mod typewriter;
