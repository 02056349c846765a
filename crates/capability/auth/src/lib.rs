//! 认证边界：校验 access token 并解析调用方身份。
//!
//! 登录与 token 签发由站点负责，这里只做校验；
//! `JwtManager::issue_access_token` 仅供工具与测试使用。

mod jwt;

use domain::CallerIdentity;

pub use jwt::JwtManager;

/// 认证相关错误。
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,
    #[error("token invalid")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

/// 身份解析 trait，便于替换实现与测试。
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<CallerIdentity, AuthError>;
}

/// 基于 JWT 的认证服务。
pub struct AuthService {
    jwt: JwtManager,
}

impl AuthService {
    pub fn new(jwt: JwtManager) -> Self {
        Self { jwt }
    }

    /// 校验 access token 并提取调用方身份。
    pub fn verify_access_token(&self, token: &str) -> Result<CallerIdentity, AuthError> {
        self.jwt.decode_access(token)
    }
}

impl IdentityResolver for AuthService {
    fn resolve(&self, token: &str) -> Result<CallerIdentity, AuthError> {
        self.verify_access_token(token)
    }
}
