use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::bean::Bean;
use crate::error::ContainerResult;

/// 单例池
///
/// 一个名称对应唯一的共享实例，条目一旦写入不会被移除。
/// 首次创建在 `creation_lock` 下进行并重新检查缓存，
/// 保证并发的首次访问只会创建一个实例。
#[derive(Default)]
pub struct SingletonPool {
    /// 单例 Bean 缓存
    singletons: RwLock<HashMap<String, Arc<dyn Bean>>>,

    /// 串行化单例创建
    creation_lock: Mutex<()>,
}

impl SingletonPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Bean>> {
        self.singletons.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.singletons.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.singletons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.singletons.read().is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.singletons.read().keys().cloned().collect()
    }

    /// 返回缓存的实例，不存在时调用 `create` 创建并缓存
    ///
    /// `create` 失败时不会写入缓存。
    ///
    /// `create` 在全局的 `creation_lock` 下执行，该锁不可重入：
    /// `create` 内部（构造函数、后置处理器、初始化回调）可以读取已缓存的单例，
    /// 但不能再触发另一个单例的首次创建，否则会死锁。
    pub fn get_or_try_create<F>(&self, name: &str, create: F) -> ContainerResult<Arc<dyn Bean>>
    where
        F: FnOnce() -> ContainerResult<Box<dyn Bean>>,
    {
        if let Some(bean) = self.get(name) {
            tracing::debug!("Returning cached instance of singleton bean '{}'", name);
            return Ok(bean);
        }

        let _guard = self.creation_lock.lock();

        // 等锁期间可能已经被其他线程创建
        if let Some(bean) = self.get(name) {
            return Ok(bean);
        }

        let bean: Arc<dyn Bean> = Arc::from(create()?);
        self.singletons
            .write()
            .insert(name.to_string(), Arc::clone(&bean));

        tracing::debug!("Singleton bean '{}' created and cached", name);
        Ok(bean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContainerError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    struct Counter(usize);
    impl Bean for Counter {}

    #[test]
    fn test_get_or_try_create_caches() {
        let pool = SingletonPool::new();
        assert!(pool.is_empty());

        let first = pool
            .get_or_try_create("counter", || Ok(Box::new(Counter(1))))
            .unwrap();
        let second = pool
            .get_or_try_create("counter", || Ok(Box::new(Counter(2))))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.downcast_ref::<Counter>().unwrap().0, 1);
        assert_eq!(pool.len(), 1);
        assert!(pool.contains("counter"));
    }

    #[test]
    fn test_failed_creation_is_not_cached() {
        let pool = SingletonPool::new();

        let result = pool.get_or_try_create("broken", || Err(ContainerError::custom("nope")));
        assert!(result.is_err());
        assert!(!pool.contains("broken"));
    }

    #[test]
    fn test_create_may_read_cached_singletons() {
        let pool = SingletonPool::new();
        pool.get_or_try_create("first", || Ok(Box::new(Counter(1)))).unwrap();

        let second = pool
            .get_or_try_create("second", || {
                let first = pool.get("first").unwrap();
                let value = first.downcast_ref::<Counter>().unwrap().0;
                Ok(Box::new(Counter(value + 1)))
            })
            .unwrap();

        assert_eq!(second.downcast_ref::<Counter>().unwrap().0, 2);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_concurrent_first_access_creates_once() {
        let pool = Arc::new(SingletonPool::new());
        let created = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let pool = Arc::clone(&pool);
                let created = Arc::clone(&created);
                thread::spawn(move || {
                    pool.get_or_try_create("shared", || {
                        created.fetch_add(1, Ordering::SeqCst);
                        Ok(Box::new(Counter(0)))
                    })
                    .unwrap()
                })
            })
            .collect();

        let beans: Vec<Arc<dyn Bean>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(created.load(Ordering::SeqCst), 1);
        for bean in &beans[1..] {
            assert!(Arc::ptr_eq(&beans[0], bean));
        }
    }
}
