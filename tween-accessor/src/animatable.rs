//! # Animatable 模块
//!
//! 具名属性对象到通道访问器的桥接。
//!
//! 对象通过实现 `Animatable` 声明自己有哪些 f32 属性可以被动画，
//! `AnimatableAccessor` 把属性列表映射为固定顺序的通道。

use std::rc::{Rc, Weak};

use tracing::debug;

use crate::accessor::{ValueAccessor, check_index};
use crate::error::{AccessorError, AccessorResult};

/// 可动画对象接口
///
/// 属性通过内部可变性修改，因此 `set_property` 只需要 `&self`。
///
/// ## 实现示例
///
/// ```rust,ignore
/// struct Sprite {
///     alpha: Cell<f32>,
///     scale: Cell<f32>,
/// }
///
/// impl Animatable for Sprite {
///     fn get_property(&self, property_id: &str) -> Option<f32> {
///         match property_id {
///             "alpha" => Some(self.alpha.get()),
///             "scale" => Some(self.scale.get()),
///             _ => None,
///         }
///     }
///
///     fn set_property(&self, property_id: &str, value: f32) -> bool {
///         match property_id {
///             "alpha" => { self.alpha.set(value); true }
///             "scale" => { self.scale.set(value); true }
///             _ => false,
///         }
///     }
///
///     fn property_list(&self) -> &'static [&'static str] {
///         &["alpha", "scale"]
///     }
/// }
/// ```
pub trait Animatable: 'static {
    /// 获取属性的当前值，属性不存在时返回 `None`
    fn get_property(&self, property_id: &str) -> Option<f32>;

    /// 设置属性的新值，属性不存在或设置失败时返回 `false`
    fn set_property(&self, property_id: &str, value: f32) -> bool;

    /// 所有可动画属性的列表，顺序即通道顺序
    fn property_list(&self) -> &'static [&'static str];
}

/// 具名属性访问器
///
/// 构造时记录属性列表，通道 i 对应第 i 个属性。
#[derive(Debug)]
pub struct AnimatableAccessor<T: Animatable> {
    target: Weak<T>,
    properties: &'static [&'static str],
}

impl<T: Animatable> AnimatableAccessor<T> {
    /// 创建访问器，目标缺失时返回 `InvalidArgument`
    pub fn new(target: &Weak<T>) -> AccessorResult<Self> {
        let object = target
            .upgrade()
            .ok_or_else(|| AccessorError::invalid_argument("目标对象不存在"))?;
        Ok(Self::bind(&object, target.clone()))
    }

    /// 从共享目标创建访问器
    pub fn from_shared(target: &Rc<T>) -> Self {
        Self::bind(target, Rc::downgrade(target))
    }

    fn bind(object: &T, target: Weak<T>) -> Self {
        let properties = object.property_list();
        debug!(?properties, "绑定具名属性访问器");
        Self { target, properties }
    }

    fn resolve(&self, index: usize) -> AccessorResult<(Rc<T>, &'static str)> {
        check_index(index, self.properties.len())?;
        let object = self.target.upgrade().ok_or(AccessorError::TargetDropped)?;
        Ok((object, self.properties[index]))
    }
}

impl<T: Animatable> Clone for AnimatableAccessor<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            properties: self.properties,
        }
    }
}

impl<T: Animatable> ValueAccessor for AnimatableAccessor<T> {
    fn channel_count(&self) -> usize {
        self.properties.len()
    }

    fn get_value(&self, index: usize) -> AccessorResult<f32> {
        let (object, property) = self.resolve(index)?;
        object
            .get_property(property)
            .ok_or(AccessorError::PropertyUnavailable { property })
    }

    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()> {
        let (object, property) = self.resolve(index)?;
        if object.set_property(property, value) {
            Ok(())
        } else {
            Err(AccessorError::PropertyUnavailable { property })
        }
    }

    fn channel_name(&self, index: usize) -> Option<&'static str> {
        self.properties.get(index).copied()
    }
}
