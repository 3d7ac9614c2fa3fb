//! Ad proto ↔ domain conversions.
//!
//! Wire timestamps are RFC 3339 strings produced by the service's
//! [`DateTimeFormatter`], so the response helpers take the formatter rather
//! than implementing plain `From`.

use rpc::ads::{
    ChangeStatusResponse, CreateRequest, CreateResponse, GetByIdResponse, ListRequest,
    UpdateByIdResponse,
};
use timefmt::DateTimeFormatter;

use crate::models::{Ad, AdFilter, CreateAd, NO_AUTHOR_FILTER};

impl From<CreateRequest> for CreateAd {
    fn from(req: CreateRequest) -> Self {
        CreateAd {
            title: req.title,
            text: req.text,
            author_id: req.author_id,
        }
    }
}

pub fn to_create_response(ad: Ad, fmt: &DateTimeFormatter) -> CreateResponse {
    CreateResponse {
        id: ad.id,
        title: ad.title,
        text: ad.text,
        author_id: ad.author_id,
        published: ad.published,
        create_date: fmt.format(ad.create_date),
        update_date: fmt.format(ad.update_date),
    }
}

pub fn to_get_by_id_response(ad: Ad, fmt: &DateTimeFormatter) -> GetByIdResponse {
    GetByIdResponse {
        id: ad.id,
        title: ad.title,
        text: ad.text,
        author_id: ad.author_id,
        published: ad.published,
        create_date: fmt.format(ad.create_date),
        update_date: fmt.format(ad.update_date),
    }
}

pub fn to_change_status_response(ad: Ad, fmt: &DateTimeFormatter) -> ChangeStatusResponse {
    ChangeStatusResponse {
        id: ad.id,
        title: ad.title,
        text: ad.text,
        author_id: ad.author_id,
        published: ad.published,
        create_date: fmt.format(ad.create_date),
        update_date: fmt.format(ad.update_date),
    }
}

pub fn to_update_by_id_response(ad: Ad, fmt: &DateTimeFormatter) -> UpdateByIdResponse {
    UpdateByIdResponse {
        id: ad.id,
        title: ad.title,
        text: ad.text,
        author_id: ad.author_id,
        published: ad.published,
        create_date: fmt.format(ad.create_date),
        update_date: fmt.format(ad.update_date),
    }
}

/// Build a domain filter from the wire request, parsing the optional
/// creation date with the service's formatter.
pub fn filter_from_list_request(
    req: ListRequest,
    fmt: &DateTimeFormatter,
) -> Result<AdFilter, chrono::ParseError> {
    let create_date = req
        .create_date
        .as_deref()
        .map(|value| fmt.parse(value))
        .transpose()?;

    Ok(AdFilter {
        author_id: req.author_id.unwrap_or(NO_AUTHOR_FILTER),
        published: req.published.unwrap_or(true),
        create_date,
        title: req.title.unwrap_or_default(),
    })
}
