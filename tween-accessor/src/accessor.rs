//! # Accessor 模块
//!
//! 补间引擎使用的统一通道访问接口。
//!
//! ## 核心概念
//!
//! - `ValueAccessor`: 以固定数量的 f32 通道暴露目标对象的字段
//! - `ScalarAccessor`: 单个 f32 目标的访问器
//!
//! 引擎先调用一次 `channel_count()`，之后在动画生命周期内
//! 对每个通道反复调用 `get_value` / `set_value`。
//!
//! 访问器不做任何插值、计时或范围约束，写入的值原样交给目标。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::warn;

use crate::error::{AccessorError, AccessorResult};
use crate::target::TargetRef;

/// 值访问器接口
///
/// 通道数量在构造时确定，之后不再变化。
/// 所有通道索引必须满足 `index < channel_count()`，
/// 越界访问返回 `IndexOutOfRange`，不会触碰目标的其他字段。
///
/// 访问器不是线程安全的：并发修改同一目标需要调用方自行同步。
pub trait ValueAccessor {
    /// 可寻址的通道数量
    fn channel_count(&self) -> usize;

    /// 读取通道当前值
    fn get_value(&self, index: usize) -> AccessorResult<f32>;

    /// 写入通道新值（原地修改目标）
    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()>;

    /// 通道名称（用于调试）
    fn channel_name(&self, index: usize) -> Option<&'static str> {
        let _ = index;
        None
    }

    /// 按索引顺序读取全部通道
    fn read_all(&self) -> AccessorResult<Vec<f32>> {
        (0..self.channel_count())
            .map(|index| self.get_value(index))
            .collect()
    }

    /// 按索引顺序写入全部通道
    ///
    /// `values` 长度必须等于 `channel_count()`，否则不写入任何值。
    fn write_all(&mut self, values: &[f32]) -> AccessorResult<()> {
        let count = self.channel_count();
        if values.len() != count {
            return Err(AccessorError::invalid_argument(format!(
                "需要 {} 个通道值，实际提供 {} 个",
                count,
                values.len()
            )));
        }
        for (index, &value) in values.iter().enumerate() {
            self.set_value(index, value)?;
        }
        Ok(())
    }
}

impl<A: ValueAccessor + ?Sized> ValueAccessor for Box<A> {
    fn channel_count(&self) -> usize {
        (**self).channel_count()
    }

    fn get_value(&self, index: usize) -> AccessorResult<f32> {
        (**self).get_value(index)
    }

    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()> {
        (**self).set_value(index, value)
    }

    fn channel_name(&self, index: usize) -> Option<&'static str> {
        (**self).channel_name(index)
    }
}

/// 检查通道索引是否在 `0..count` 范围内
pub fn check_index(index: usize, count: usize) -> AccessorResult<()> {
    if index < count {
        Ok(())
    } else {
        warn!(index, count, "通道索引越界");
        Err(AccessorError::IndexOutOfRange { index, count })
    }
}

/// 单个 f32 目标的访问器
#[derive(Debug, Clone)]
pub struct ScalarAccessor {
    target: TargetRef<f32>,
}

impl ScalarAccessor {
    /// 创建访问器，目标缺失时返回 `InvalidArgument`
    pub fn new(target: &Weak<RefCell<f32>>) -> AccessorResult<Self> {
        Ok(Self {
            target: TargetRef::new(target)?,
        })
    }

    /// 从共享目标创建访问器
    pub fn from_shared(target: &Rc<RefCell<f32>>) -> Self {
        Self {
            target: TargetRef::from_shared(target),
        }
    }
}

impl ValueAccessor for ScalarAccessor {
    fn channel_count(&self) -> usize {
        1
    }

    fn get_value(&self, index: usize) -> AccessorResult<f32> {
        check_index(index, 1)?;
        self.target.read(|v| *v)
    }

    fn set_value(&mut self, index: usize, value: f32) -> AccessorResult<()> {
        check_index(index, 1)?;
        self.target.write(|v| *v = value)
    }

    fn channel_name(&self, index: usize) -> Option<&'static str> {
        (index == 0).then_some("value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(1, 1),
            Err(AccessorError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert!(check_index(0, 0).is_err());
    }

    #[test]
    fn test_scalar_accessor() {
        let shared = Rc::new(RefCell::new(0.5_f32));
        let mut accessor = ScalarAccessor::from_shared(&shared);

        assert_eq!(accessor.channel_count(), 1);
        assert_eq!(accessor.get_value(0), Ok(0.5));

        accessor.set_value(0, 0.8).unwrap();
        assert_eq!(accessor.get_value(0), Ok(0.8));
        assert_eq!(*shared.borrow(), 0.8);

        // 不做范围约束
        accessor.set_value(0, -3.0).unwrap();
        assert_eq!(*shared.borrow(), -3.0);
    }

    #[test]
    fn test_scalar_accessor_out_of_range() {
        let shared = Rc::new(RefCell::new(0.5_f32));
        let mut accessor = ScalarAccessor::from_shared(&shared);

        assert!(matches!(
            accessor.get_value(1),
            Err(AccessorError::IndexOutOfRange { index: 1, count: 1 })
        ));
        assert!(accessor.set_value(1, 9.0).is_err());
        assert_eq!(*shared.borrow(), 0.5);
    }

    #[test]
    fn test_scalar_accessor_missing_target() {
        let err = ScalarAccessor::new(&Weak::new()).unwrap_err();
        assert!(matches!(err, AccessorError::InvalidArgument { .. }));
    }

    #[test]
    fn test_read_write_all() {
        let shared = Rc::new(RefCell::new(0.0_f32));
        let mut accessor = ScalarAccessor::from_shared(&shared);

        accessor.write_all(&[0.75]).unwrap();
        assert_eq!(accessor.read_all(), Ok(vec![0.75]));

        // 长度不匹配时不写入
        let err = accessor.write_all(&[0.1, 0.2]).unwrap_err();
        assert!(matches!(err, AccessorError::InvalidArgument { .. }));
        assert_eq!(*shared.borrow(), 0.75);
    }

    #[test]
    fn test_boxed_dyn_accessor() {
        let shared = Rc::new(RefCell::new(1.0_f32));
        let mut accessors: Vec<Box<dyn ValueAccessor>> = Vec::new();
        accessors.push(Box::new(ScalarAccessor::from_shared(&shared)));

        for accessor in &mut accessors {
            let count = accessor.channel_count();
            for index in 0..count {
                let current = accessor.get_value(index).unwrap();
                accessor.set_value(index, current * 0.5).unwrap();
            }
            assert_eq!(accessor.channel_name(0), Some("value"));
        }
        assert_eq!(*shared.borrow(), 0.5);
    }

    #[test]
    fn test_channel_count_stable() {
        let shared = Rc::new(RefCell::new(0.0_f32));
        let mut accessor = ScalarAccessor::from_shared(&shared);
        let before = accessor.channel_count();
        accessor.set_value(0, 1.0).unwrap();
        assert_eq!(accessor.channel_count(), before);
        assert_eq!(accessor.channel_count(), before);
    }
}
