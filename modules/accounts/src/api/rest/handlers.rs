use axum::{http::StatusCode, response::Json, Extension};
use http_api::auth::CurrentUser;
use http_api::problem::ProblemResponse;
use tracing::error;

use crate::api::rest::dto::{
    self, CatalogsDto, ChangePasswordReq, LoginDto, LoginReq, OnboardingReq, ProfilePatchReq,
    SignupDto, SignupReq, UserDto,
};
use crate::api::rest::error::problem_from;
use crate::domain::service::Service;

/// Create an account. The only unauthenticated write in the system.
pub async fn signup(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<SignupReq>,
) -> Result<(StatusCode, Json<SignupDto>), ProblemResponse> {
    match svc.signup(req.into()).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(SignupDto {
                id: user.id,
                email: user.email,
                name: user.name,
            }),
        )),
        Err(e) => {
            error!("Signup failed: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Verify credentials, issue a session token.
pub async fn login(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    Json(req): Json<LoginReq>,
) -> Result<Json<LoginDto>, ProblemResponse> {
    match svc.login(req.into()).await {
        Ok((user, token)) => Ok(Json(LoginDto {
            token,
            user: UserDto::from(user),
        })),
        Err(e) => Err(problem_from(&e)),
    }
}

/// The caller's own profile.
pub async fn get_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<UserDto>, ProblemResponse> {
    match svc.get_user(user_id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", user_id, e);
            Err(problem_from(&e))
        }
    }
}

/// Partial profile update.
pub async fn update_user(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<ProfilePatchReq>,
) -> Result<Json<UserDto>, ProblemResponse> {
    match svc.update_profile(user_id, req.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            Err(problem_from(&e))
        }
    }
}

/// Complete onboarding; also brings the reset plan into existence.
pub async fn onboard(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<OnboardingReq>,
) -> Result<Json<UserDto>, ProblemResponse> {
    match svc.onboard(user_id, req.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Onboarding failed for {}: {}", user_id, e);
            Err(problem_from(&e))
        }
    }
}

/// Change the password after verifying the current one.
pub async fn change_password(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<ChangePasswordReq>,
) -> Result<StatusCode, ProblemResponse> {
    match svc
        .change_password(user_id, &req.current_password, &req.new_password)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(problem_from(&e)),
    }
}

/// Static locale/goal catalogs.
pub async fn catalogs(CurrentUser(_user_id): CurrentUser) -> Json<CatalogsDto> {
    Json(dto::catalogs())
}
