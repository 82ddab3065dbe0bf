//! Option keys the engine reads or writes itself.
//!
//! Fragment tables may carry arbitrary other keys; they pass through the
//! merge untouched.

pub const ADD_ITEM_VIEW: &str = "add_item_view";
pub const ALLOW_CREATING: &str = "allow_creating";
pub const ALLOW_MAPPING: &str = "allow_mapping";
pub const ALLOW_READING: &str = "allow_reading";
pub const CONTENT_CONTROLLER: &str = "content_controller";
pub const CONTENT_CONTROLLER_OPTIONS: &str = "content_controller_options";
pub const DRAW_CHILDREN: &str = "draw_children";
pub const FAR_MODEL: &str = "far_model";
pub const INSTANCE: &str = "instance";
pub const MODEL: &str = "model";
pub const ORDER: &str = "order";
pub const PARENT_INSTANCE: &str = "parent_instance";
pub const TREE_VIEW_DEPTH: &str = "treeViewDepth";
pub const UNCOUNTABLE: &str = "uncountable";
pub const WIDGET_ICON: &str = "widget_icon";
pub const WIDGET_ID: &str = "widget_id";
pub const WIDGET_NAME: &str = "widget_name";
pub const WIDGET_VIEW: &str = "widget_view";
