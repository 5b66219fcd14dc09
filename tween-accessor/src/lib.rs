//! # Tween Accessor
//!
//! 补间引擎与动画目标之间的通道访问层。
//!
//! ## 架构概述
//!
//! 补间引擎不知道目标对象的具体类型，只通过 [`ValueAccessor`]
//! 读写一组按索引寻址的 f32 通道：
//!
//! ```text
//! Engine                        Accessor                 Target
//!   │── channel_count() ──────────►│                        │
//!   │── get_value(i) ─────────────►│──── read ─────────────►│
//!   │── set_value(i, v) ──────────►│──── write ────────────►│
//! ```
//!
//! 访问器本身不做插值、计时或范围约束。
//!
//! ## 使用示例
//!
//! ```ignore
//! use tween_accessor::{Color, ColorAlphaAccessor, ValueAccessor};
//!
//! let color = Color::rgb(1.0, 0.0, 0.0).with_alpha(0.5).shared();
//! let mut alpha = ColorAlphaAccessor::from_shared(&color);
//!
//! let from = alpha.get_value(0)?;
//! alpha.set_value(0, from + (0.0 - from) * t)?;
//! ```
//!
//! ## 模块结构
//!
//! - [`accessor`]：`ValueAccessor` 接口与标量访问器
//! - [`color_accessor`]：颜色访问器
//! - [`animatable`]：具名属性对象的桥接
//! - [`target`]：目标对象的非拥有引用
//! - [`config`]：数据驱动的绑定配置
//! - [`error`]：错误类型

pub mod accessor;
pub mod animatable;
pub mod color;
pub mod color_accessor;
pub mod config;
pub mod error;
pub mod target;

pub use accessor::{ScalarAccessor, ValueAccessor, check_index};
pub use animatable::{Animatable, AnimatableAccessor};
pub use color::Color;
pub use color_accessor::{ColorAccessor, ColorAlphaAccessor, ColorChannels};
pub use config::BindingConfig;
pub use error::{AccessorError, AccessorResult, ConfigError};
pub use target::TargetRef;
