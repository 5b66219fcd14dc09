//! # Color Accessor 模块
//!
//! 颜色目标的访问器。
//!
//! - `ColorAlphaAccessor`: 仅暴露透明度的单通道访问器
//! - `ColorAccessor`: 按 `ColorChannels` 选择暴露哪些分量

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accessor::{ValueAccessor, check_index};
use crate::color::Color;
use crate::error::AccessorResult;
use crate::target::TargetRef;

/// 颜色透明度访问器
///
/// 通道 0 对应 `Color::a`，写入不做范围约束。
#[derive(Debug, Clone)]
pub struct ColorAlphaAccessor {
    target: TargetRef<Color>,
}

impl ColorAlphaAccessor {
    /// 创建访问器，目标缺失时返回 `InvalidArgument`
    pub fn new(target: &Weak<RefCell<Color>>) -> AccessorResult<Self> {
        Ok(Self {
            target: TargetRef::new(target)?,
        })
    }

    /// 从共享目标创建访问器
    pub fn from_shared(target: &Rc<RefCell<Color>>) -> Self {
        Self {
            target: TargetRef::from_shared(target),
        }
    }
}

impl ValueAccessor for ColorAlphaAccessor {
    fn channel_count(&self) -> usize {
        1
    }

    fn get_value(&self, index: usize) -> AccessorResult<f32> {
        check_index(index, 1)?;
        self.target.read(|c| c.a)
    }

    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()> {
        check_index(index, 1)?;
        self.target.write(|c| c.a = value)
    }

    fn channel_name(&self, index: usize) -> Option<&'static str> {
        (index == 0).then_some("a")
    }
}

/// 颜色分量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    R,
    G,
    B,
    A,
}

impl Component {
    fn name(self) -> &'static str {
        match self {
            Self::R => "r",
            Self::G => "g",
            Self::B => "b",
            Self::A => "a",
        }
    }

    fn get(self, color: &Color) -> f32 {
        match self {
            Self::R => color.r,
            Self::G => color.g,
            Self::B => color.b,
            Self::A => color.a,
        }
    }

    fn slot(self, color: &mut Color) -> &mut f32 {
        match self {
            Self::R => &mut color.r,
            Self::G => &mut color.g,
            Self::B => &mut color.b,
            Self::A => &mut color.a,
        }
    }
}

/// 访问器暴露的颜色分量组合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChannels {
    /// 仅透明度
    #[default]
    Alpha,
    /// 红、绿、蓝
    Rgb,
    /// 红、绿、蓝、透明度
    Rgba,
}

impl ColorChannels {
    fn components(self) -> &'static [Component] {
        use Component::*;
        match self {
            Self::Alpha => &[A],
            Self::Rgb => &[R, G, B],
            Self::Rgba => &[R, G, B, A],
        }
    }

    /// 该组合的通道数量
    pub fn channel_count(self) -> usize {
        self.components().len()
    }
}

/// 按分量组合访问颜色的访问器
#[derive(Debug, Clone)]
pub struct ColorAccessor {
    target: TargetRef<Color>,
    channels: ColorChannels,
}

impl ColorAccessor {
    /// 创建访问器，目标缺失时返回 `InvalidArgument`
    pub fn new(target: &Weak<RefCell<Color>>, channels: ColorChannels) -> AccessorResult<Self> {
        let target = TargetRef::new(target)?;
        debug!(?channels, "绑定颜色访问器");
        Ok(Self { target, channels })
    }

    /// 从共享目标创建访问器
    pub fn from_shared(target: &Rc<RefCell<Color>>, channels: ColorChannels) -> Self {
        Self {
            target: TargetRef::from_shared(target),
            channels,
        }
    }

    /// 暴露的分量组合
    pub fn channels(&self) -> ColorChannels {
        self.channels
    }

    fn component(&self, index: usize) -> AccessorResult<Component> {
        let components = self.channels.components();
        check_index(index, components.len())?;
        Ok(components[index])
    }
}

impl ValueAccessor for ColorAccessor {
    fn channel_count(&self) -> usize {
        self.channels.channel_count()
    }

    fn get_value(&self, index: usize) -> AccessorResult<f32> {
        let component = self.component(index)?;
        self.target.read(|c| component.get(c))
    }

    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()> {
        let component = self.component(index)?;
        self.target.write(|c| *component.slot(c) = value)
    }

    fn channel_name(&self, index: usize) -> Option<&'static str> {
        self.channels.components().get(index).map(|c| c.name())
    }
}
