//! Users gRPC service implementation.

use std::sync::Arc;

use domain_users::{CreateUser, UpdateUser, UserRepository, UserService};
use rpc::users::{
    users_service_server::UsersService, CreateRequest, CreateResponse, DeleteByIdRequest,
    DeleteByIdResponse, GetByIdRequest, GetByIdResponse, UpdateByIdRequest, UpdateByIdResponse,
};
use tonic::{Request, Response, Status};
use tracing::info;

/// gRPC service implementation for users.
pub struct UsersGrpcService<U>
where
    U: UserRepository + 'static,
{
    users: Arc<UserService<U>>,
}

impl<U> UsersGrpcService<U>
where
    U: UserRepository + 'static,
{
    pub fn new(users: UserService<U>) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

#[tonic::async_trait]
impl<U> UsersService for UsersGrpcService<U>
where
    U: UserRepository + 'static,
{
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        let input: CreateUser = request.into_inner().into();
        let user = self.users.create_user(input).await.map_err(Status::from)?;
        Ok(Response::new(user.into()))
    }

    async fn get_by_id(
        &self,
        request: Request<GetByIdRequest>,
    ) -> Result<Response<GetByIdResponse>, Status> {
        let user = self
            .users
            .get_user_by_id(request.into_inner().id)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user.into()))
    }

    async fn update_by_id(
        &self,
        request: Request<UpdateByIdRequest>,
    ) -> Result<Response<UpdateByIdResponse>, Status> {
        let req = request.into_inner();
        let user = self
            .users
            .update_user(
                req.id,
                UpdateUser {
                    nickname: req.nickname,
                    email: req.email,
                },
            )
            .await
            .map_err(Status::from)?;
        Ok(Response::new(user.into()))
    }

    async fn delete_by_id(
        &self,
        request: Request<DeleteByIdRequest>,
    ) -> Result<Response<DeleteByIdResponse>, Status> {
        let id = request.into_inner().id;
        self.users.remove_user(id).await.map_err(Status::from)?;

        info!(user_id = id, "Deleted user");
        Ok(Response::new(DeleteByIdResponse {}))
    }
}
