//! Ads gRPC service implementation.
//!
//! Wraps the domain `AdService` and handles proto ↔ domain conversions.
//! Like the REST layer, ad creation resolves the author against the user
//! service first; the ad service itself never checks user existence.

use std::sync::Arc;

use domain_ads::{conversions as conv, AdRepository, AdService, CreateAd};
use domain_users::{UserRepository, UserService};
use rpc::ads::{
    ads_service_server::AdsService, ChangeStatusRequest, ChangeStatusResponse, CreateRequest,
    CreateResponse, DeleteByIdRequest, DeleteByIdResponse, GetByIdRequest, GetByIdResponse,
    ListRequest, ListResponse, UpdateByIdRequest, UpdateByIdResponse,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// gRPC service implementation for ads.
///
/// Generic over the repository types for testability.
pub struct AdsGrpcService<R, U>
where
    R: AdRepository + 'static,
    U: UserRepository + 'static,
{
    ads: Arc<AdService<R>>,
    users: Arc<UserService<U>>,
}

impl<R, U> AdsGrpcService<R, U>
where
    R: AdRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(ads: AdService<R>, users: UserService<U>) -> Self {
        Self {
            ads: Arc::new(ads),
            users: Arc::new(users),
        }
    }
}

#[tonic::async_trait]
impl<R, U> AdsService for AdsGrpcService<R, U>
where
    R: AdRepository + 'static,
    U: UserRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let input: CreateAd = request.into_inner().into();

        self.users
            .get_user_by_id(input.author_id)
            .await
            .map_err(Status::from)?;

        let ad = self.ads.create_ad(input).await.map_err(Status::from)?;
        Ok(Response::new(conv::to_create_response(
            ad,
            self.ads.formatter(),
        )))
    }

    async fn get_by_id(
        &self,
        request: Request<GetByIdRequest>,
    ) -> Result<Response<GetByIdResponse>, Status> {
        let ad = self
            .ads
            .get_ad_by_id(request.into_inner().id)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(conv::to_get_by_id_response(
            ad,
            self.ads.formatter(),
        )))
    }

    async fn change_status(
        &self,
        request: Request<ChangeStatusRequest>,
    ) -> Result<Response<ChangeStatusResponse>, Status> {
        let req = request.into_inner();

        // A caller that does not resolve to a known user is forbidden.
        self.users
            .get_user_by_id(req.author_id)
            .await
            .map_err(|err| Status::permission_denied(err.to_string()))?;

        let ad = self
            .ads
            .change_ad_status(req.id, req.author_id, req.published)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(conv::to_change_status_response(
            ad,
            self.ads.formatter(),
        )))
    }

    async fn update_by_id(
        &self,
        request: Request<UpdateByIdRequest>,
    ) -> Result<Response<UpdateByIdResponse>, Status> {
        let req = request.into_inner();
        let ad = self
            .ads
            .update_ad(req.id, req.author_id, req.title, req.text)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(conv::to_update_by_id_response(
            ad,
            self.ads.formatter(),
        )))
    }

    async fn list(&self, request: Request<ListRequest>) -> Result<Response<ListResponse>, Status> {
        let filter = conv::filter_from_list_request(request.into_inner(), self.ads.formatter())
            .map_err(|err| Status::invalid_argument(format!("invalid create_date: {}", err)))?;

        let ads = self.ads.list_ads(filter).await.map_err(Status::from)?;
        let data = ads
            .into_iter()
            .map(|ad| conv::to_create_response(ad, self.ads.formatter()))
            .collect();
        Ok(Response::new(ListResponse { data }))
    }

    async fn delete_by_id(
        &self,
        request: Request<DeleteByIdRequest>,
    ) -> Result<Response<DeleteByIdResponse>, Status> {
        let req = request.into_inner();
        self.ads
            .remove_ad(req.id, req.author_id)
            .await
            .map_err(Status::from)?;

        info!(ad_id = req.id, "Deleted ad");
        Ok(Response::new(DeleteByIdResponse {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ads::InMemoryAdRepository;
    use domain_users::{CreateUser, InMemoryUserRepository};
    use timefmt::DateTimeFormatter;

    type TestService = AdsGrpcService<InMemoryAdRepository, InMemoryUserRepository>;

    /// Service with one registered user (id 0).
    async fn service_with_user() -> TestService {
        let users = UserService::new(InMemoryUserRepository::new());
        users
            .create_user(CreateUser {
                nickname: "alice".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap();

        let ads = AdService::new(InMemoryAdRepository::new(), DateTimeFormatter::seconds());
        AdsGrpcService::new(ads, users)
    }

    fn create_request(title: &str, author_id: i64) -> Request<CreateRequest> {
        Request::new(CreateRequest {
            title: title.to_string(),
            text: format!("{} text", title),
            author_id,
        })
    }

    #[tokio::test]
    async fn test_create_ad_success() {
        let service = service_with_user().await;

        let response = service.create(create_request("phone", 0)).await;
        assert!(response.is_ok(), "Create ad should succeed");

        let ad = response.unwrap().into_inner();
        assert_eq!(ad.id, 0);
        assert_eq!(ad.title, "phone");
        assert!(!ad.published);
        assert_eq!(ad.create_date, ad.update_date);
    }

    #[tokio::test]
    async fn test_create_ad_with_unknown_author() {
        let service = service_with_user().await;

        let response = service.create(create_request("phone", 99)).await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_create_ad_with_empty_title() {
        let service = service_with_user().await;

        let response = service.create(create_request("", 0)).await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_ad_not_found() {
        let service = service_with_user().await;

        let response = service.get_by_id(Request::new(GetByIdRequest { id: 5 })).await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_change_status_by_stranger_is_permission_denied() {
        let service = service_with_user().await;
        service.create(create_request("phone", 0)).await.unwrap();

        // Register a second user so the caller resolves, then fail ownership.
        service
            .users
            .create_user(CreateUser {
                nickname: "bob".to_string(),
                email: "b@x.com".to_string(),
            })
            .await
            .unwrap();

        let response = service
            .change_status(Request::new(ChangeStatusRequest {
                id: 0,
                author_id: 1,
                published: true,
            }))
            .await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_change_status_by_unknown_caller_is_permission_denied() {
        let service = service_with_user().await;
        service.create(create_request("phone", 0)).await.unwrap();

        let response = service
            .change_status(Request::new(ChangeStatusRequest {
                id: 0,
                author_id: 42,
                published: true,
            }))
            .await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_update_ad_round_trip() {
        let service = service_with_user().await;
        service.create(create_request("phone", 0)).await.unwrap();

        let response = service
            .update_by_id(Request::new(UpdateByIdRequest {
                id: 0,
                author_id: 0,
                title: "tablet".to_string(),
                text: "buy new tablet".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.title, "tablet");
        assert_eq!(response.text, "buy new tablet");
        assert_eq!(response.author_id, 0);
    }

    #[tokio::test]
    async fn test_list_defaults_to_published() {
        let service = service_with_user().await;
        service.create(create_request("draft", 0)).await.unwrap();
        service.create(create_request("live", 0)).await.unwrap();
        service
            .change_status(Request::new(ChangeStatusRequest {
                id: 1,
                author_id: 0,
                published: true,
            }))
            .await
            .unwrap();

        let response = service
            .list(Request::new(ListRequest {
                author_id: None,
                published: None,
                title: None,
                create_date: None,
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].title, "live");
    }

    #[tokio::test]
    async fn test_list_rejects_malformed_date() {
        let service = service_with_user().await;

        let response = service
            .list(Request::new(ListRequest {
                author_id: None,
                published: None,
                title: None,
                create_date: Some("yesterday".to_string()),
            }))
            .await;
        assert!(response.is_err());
        assert_eq!(response.unwrap_err().code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_delete_requires_ownership() {
        let service = service_with_user().await;
        service.create(create_request("phone", 0)).await.unwrap();

        let denied = service
            .delete_by_id(Request::new(DeleteByIdRequest { id: 0, author_id: 9 }))
            .await;
        assert_eq!(denied.unwrap_err().code(), tonic::Code::PermissionDenied);

        let deleted = service
            .delete_by_id(Request::new(DeleteByIdRequest { id: 0, author_id: 0 }))
            .await;
        assert!(deleted.is_ok());

        let gone = service.get_by_id(Request::new(GetByIdRequest { id: 0 })).await;
        assert_eq!(gone.unwrap_err().code(), tonic::Code::NotFound);
    }
}
