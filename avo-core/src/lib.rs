//! # avo-core
//!
//! Content block model of the "Het Archief voor Onderwijs" content pages.
//!
//! This crate provides the block type registry, the field schemas and
//! validators, the generic form and preview renderers, the parser and
//! serializer for persisted blocks and the state of the admin editor.

pub mod blocks;
pub mod config;
pub mod editor;
pub mod error;
pub mod fields;
pub mod form;
pub mod i18n;
pub mod merge;
pub mod models;
pub mod preview;
pub mod registry;
pub mod routing;
pub mod services;
pub mod slug;
pub mod validators;
pub mod wire;

pub use avo_types::{ContentBlockId, ContentBlockType, ContentId, EditorType};
pub use config::Config;
pub use editor::{ContentEditor, EditorError, LoadOutcome, MoveDirection};
pub use error::{ContentBlockError, LimitViolation};
pub use form::{BlockForm, FormState, RenderedField, RenderedGroup};
pub use i18n::{Translate, Translations};
pub use merge::merge_defaults;
pub use models::{
    BlockConfig, ButtonAction, ButtonActionType, ComponentState, ComponentsConfig,
    ContentBlockConfig, FieldSchema, Fields, FormGroupType, RepeatLimits, StateMap,
};
pub use preview::{DisplayComponent, PagePreview, PreviewBlock, PreviewProps, PreviewRenderer};
pub use registry::BlockRegistry;
pub use routing::{Navigator, Router};
pub use services::{ClientError, ContentClient, Notifier};
pub use slug::slugify;
pub use wire::{from_wire, rows_from_json, to_wire, to_wire_list, ContentBlockSchema};
