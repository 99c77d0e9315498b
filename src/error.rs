//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("非法边权重: {0}")]
    InvalidWeight(i64),

    #[error("图容量已满: {capacity}")]
    CapacityExceeded { capacity: usize },
}
