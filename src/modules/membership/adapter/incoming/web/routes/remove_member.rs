use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::{DeleteResponse, ErrorResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::membership::application::ports::incoming::use_cases::RemoveMemberError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Remove a user from a group
#[utoipa::path(
    delete,
    path = "/api/memberships/groups/{group_id}/users/{user_id}",
    tag = "memberships",
    security(("bearer_auth" = [])),
    params(
        ("group_id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "User id"),
    ),
    responses(
        (status = 200, description = "Member removed", body = DeleteResponse),
        (status = 404, description = "No active membership", body = ErrorResponse),
    )
)]
#[delete("/api/memberships/groups/{group_id}/users/{user_id}")]
pub async fn remove_member_handler(
    _user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (group_id, user_id) = path.into_inner();

    match data.membership.remove.execute(group_id, user_id).await {
        Ok(()) => ApiResponse::success(DeleteResponse::new("Member removed successfully", 1)),
        Err(RemoveMemberError::MembershipNotFound) => {
            ApiResponse::not_found("MEMBERSHIP_NOT_FOUND", "Membership not found")
        }
        Err(e) => {
            error!(group_id, user_id, "Failed to remove member: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, token_provider_data},
        read_json,
        stubs::StubRemoveMemberUseCase,
    };

    #[actix_web::test]
    async fn remove_then_remove_again() {
        let stub = StubRemoveMemberUseCase::with_members(vec![(1, 3)]);
        let state = TestAppStateBuilder::default()
            .with_remove_member(stub)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(remove_member_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/memberships/groups/1/users/3")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["deleted_count"], 1);

        let req = test::TestRequest::delete()
            .uri("/api/memberships/groups/1/users/3")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = read_json(resp).await;
        assert_eq!(json["code"], "MEMBERSHIP_NOT_FOUND");
    }
}
