//! User proto ↔ domain conversions

use rpc::users::{CreateRequest, CreateResponse, GetByIdResponse, UpdateByIdResponse};

use crate::models::{CreateUser, User};

impl From<CreateRequest> for CreateUser {
    fn from(req: CreateRequest) -> Self {
        CreateUser {
            nickname: req.nickname,
            email: req.email,
        }
    }
}

impl From<User> for CreateResponse {
    fn from(user: User) -> Self {
        CreateResponse {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
        }
    }
}

impl From<User> for GetByIdResponse {
    fn from(user: User) -> Self {
        GetByIdResponse {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
        }
    }
}

impl From<User> for UpdateByIdResponse {
    fn from(user: User) -> Self {
        UpdateByIdResponse {
            id: user.id,
            nickname: user.nickname,
            email: user.email,
        }
    }
}
