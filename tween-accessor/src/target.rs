//! # Target 模块
//!
//! 动画目标句柄：访问器对目标对象的非拥有引用。
//!
//! 目标由调用方以 `Rc<RefCell<T>>` 持有，访问器只保存 `Weak`。
//! 目标的生命周期完全由调用方管理，访问器在每次读写时检查目标是否仍然存在。
//!
//! `Rc` / `RefCell` 使句柄既不是 `Send` 也不是 `Sync`，
//! 跨线程共享同一目标必须由调用方自行同步。

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{AccessorError, AccessorResult};

/// 目标对象的非拥有引用
pub struct TargetRef<T> {
    target: Weak<RefCell<T>>,
}

impl<T> TargetRef<T> {
    /// 从弱引用创建句柄
    ///
    /// 悬空的弱引用（如 `Weak::new()`）视为缺失的目标，返回 `InvalidArgument`。
    pub fn new(target: &Weak<RefCell<T>>) -> AccessorResult<Self> {
        if target.strong_count() == 0 {
            return Err(AccessorError::invalid_argument("目标对象不存在"));
        }
        Ok(Self {
            target: target.clone(),
        })
    }

    /// 从共享目标创建句柄（不会失败）
    pub fn from_shared(target: &Rc<RefCell<T>>) -> Self {
        Self {
            target: Rc::downgrade(target),
        }
    }

    /// 目标是否仍然存在
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    /// 以只读方式访问目标
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> AccessorResult<R> {
        let target = self.target.upgrade().ok_or(AccessorError::TargetDropped)?;
        let guard = target.try_borrow().map_err(|_| AccessorError::TargetBusy)?;
        let result = f(&guard);
        Ok(result)
    }

    /// 以可写方式访问目标
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> AccessorResult<R> {
        let target = self.target.upgrade().ok_or(AccessorError::TargetDropped)?;
        let mut guard = target
            .try_borrow_mut()
            .map_err(|_| AccessorError::TargetBusy)?;
        let result = f(&mut guard);
        Ok(result)
    }
}

impl<T> Clone for TargetRef<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<T> fmt::Debug for TargetRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetRef")
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_target_rejected() {
        let missing: Weak<RefCell<f32>> = Weak::new();
        let err = TargetRef::new(&missing).unwrap_err();
        assert!(matches!(err, AccessorError::InvalidArgument { .. }));

        // 已释放的目标同样视为缺失
        let shared = Rc::new(RefCell::new(1.0_f32));
        let weak = Rc::downgrade(&shared);
        drop(shared);
        assert!(TargetRef::new(&weak).is_err());
    }

    #[test]
    fn test_read_write() {
        let shared = Rc::new(RefCell::new(0.5_f32));
        let target = TargetRef::from_shared(&shared);

        assert_eq!(target.read(|v| *v), Ok(0.5));
        target.write(|v| *v = 0.25).unwrap();
        assert_eq!(*shared.borrow(), 0.25);
    }

    #[test]
    fn test_target_dropped_after_construction() {
        let shared = Rc::new(RefCell::new(0.5_f32));
        let target = TargetRef::from_shared(&shared);
        assert!(target.is_alive());

        drop(shared);
        assert!(!target.is_alive());
        assert_eq!(target.read(|v| *v), Err(AccessorError::TargetDropped));
        assert_eq!(target.write(|v| *v = 1.0), Err(AccessorError::TargetDropped));
    }

    #[test]
    fn test_target_busy() {
        let shared = Rc::new(RefCell::new(0.5_f32));
        let target = TargetRef::from_shared(&shared);

        let _guard = shared.borrow_mut();
        assert_eq!(target.read(|v| *v), Err(AccessorError::TargetBusy));
        assert_eq!(target.write(|v| *v = 1.0), Err(AccessorError::TargetBusy));
    }

    #[test]
    fn test_does_not_keep_target_alive() {
        let shared = Rc::new(RefCell::new(0.0_f32));
        let target = TargetRef::from_shared(&shared);
        let _copy = target.clone();
        assert_eq!(Rc::strong_count(&shared), 1);
    }
}
