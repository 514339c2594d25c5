//! Models module for the SDK
//!
//! Defines the design-side input structures (records, templates,
//! alterations) and the artifact-side output structures (forms, pages)
//! produced by compilation.

pub mod alteration;
pub mod design;
pub mod enums;
pub mod form;
pub mod page;
pub mod record;
pub mod template;

pub use alteration::{ComponentAddition, ComponentChange, PageAlteration};
pub use design::ApplicationDesign;
pub use enums::*;
pub use form::{ChildForm, DataField, Form};
pub use page::{
    Action, Button, FieldComponent, Page, PageComponent, PageInput, Panel, TableColumn,
    TableComponent, Trigger,
};
pub use record::{
    ChildRecord, CompositeRecord, ExtendedRecord, Field, FieldSelection, Record, SimpleRecord,
};
pub use template::{
    ButtonSpec, GridColumn, GridTemplate, ListTemplate, MasterTemplate, MenuEntry, PageTemplate,
    SaveTemplate, TabSpec, ViewTemplate,
};
