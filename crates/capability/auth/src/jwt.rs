use crate::AuthError;
use domain::CallerIdentity;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Serialize, Deserialize)]
/// JWT 内部 claims。
struct Claims {
    /// 站点用户 ID。
    sub: String,
    /// 后端（warehouse）用户 ID，报表按它鉴权。
    warehouse_user_id: String,
    exp: usize,
    token_type: String,
}

/// JWT 签发与校验。
pub struct JwtManager {
    secret: Vec<u8>,
    access_ttl_seconds: u64,
}

impl JwtManager {
    /// 创建 JWT 管理器。
    pub fn new(secret: String, access_ttl_seconds: u64) -> Self {
        Self {
            secret: secret.into_bytes(),
            access_ttl_seconds,
        }
    }

    /// 为站点用户签发 access token。
    pub fn issue_access_token(
        &self,
        site_user_id: &str,
        caller: &CallerIdentity,
    ) -> Result<String, AuthError> {
        let exp = (now_epoch_seconds() + self.access_ttl_seconds) as usize;
        let claims = Claims {
            sub: site_user_id.to_string(),
            warehouse_user_id: caller.user_id.clone(),
            exp,
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|err| AuthError::Internal(err.to_string()))
    }

    /// 解析 access token。
    pub fn decode_access(&self, token: &str) -> Result<CallerIdentity, AuthError> {
        let claims = self.decode_claims(token)?;
        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AuthError::TokenInvalid);
        }
        // 站点账号未绑定 warehouse 用户时无法鉴权
        if claims.warehouse_user_id.trim().is_empty() {
            return Err(AuthError::TokenInvalid);
        }
        Ok(CallerIdentity::new(claims.warehouse_user_id))
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let decoded = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(map_jwt_error)?;
        Ok(decoded.claims)
    }
}

/// 当前时间戳（秒）。
fn now_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// 将 jwt 库错误映射为业务错误。
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::TokenInvalid,
    }
}
