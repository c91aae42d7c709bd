//! Alert and pagination response headers.
//!
//! Mutations report what happened through `X-roomfinderApp-alert` and
//! `X-roomfinderApp-params`; listings report the total number of rooms in
//! `X-Total-Count` and, when paged, navigation links in `Link`.

use std::fmt::Display;

use axum::http::{HeaderMap, HeaderName, HeaderValue, header::LINK};

use crate::domain::{Page, RoomId};

/// Prefix of alert message keys
pub const APPLICATION_NAME: &str = "roomfinderApp";

/// Entity name used in alert message keys
pub const ENTITY_NAME: &str = "room";

pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-roomfinderapp-alert");
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-roomfinderapp-error");
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-roomfinderapp-params");
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(e) => tracing::warn!("Dropping header '{}': {}", name, e),
    }
}

fn alert(action: &str, id: impl Display) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(
        &mut headers,
        ALERT_HEADER,
        &format!("{APPLICATION_NAME}.{ENTITY_NAME}.{action}"),
    );
    insert(&mut headers, PARAMS_HEADER, &id.to_string());
    headers
}

pub fn entity_creation_alert(id: RoomId) -> HeaderMap {
    alert("created", id)
}

pub fn entity_update_alert(id: RoomId) -> HeaderMap {
    alert("updated", id)
}

/// Takes the raw path id, since ids that were never stored are deleted too
pub fn entity_deletion_alert(id: i64) -> HeaderMap {
    alert("deleted", id)
}

/// Headers for a rejected request, keyed by its message key (`error.idexists`)
pub fn failure_alert(message_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ERROR_HEADER, message_key);
    insert(&mut headers, PARAMS_HEADER, ENTITY_NAME);
    headers
}

pub fn total_count(total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(total));
    headers
}

fn page_uri(base_url: &str, page: u64, size: u32) -> String {
    format!("{base_url}?page={page}&size={size}")
}

/// `Link` header value with `next`, `prev`, `last` and `first` relations
pub fn link_header<T>(page: &Page<T>, base_url: &str) -> String {
    let number = u64::from(page.page);
    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(format!("<{}>; rel=\"next\"", page_uri(base_url, number + 1, page.size)));
    }
    if page.has_previous() {
        links.push(format!("<{}>; rel=\"prev\"", page_uri(base_url, number - 1, page.size)));
    }
    let last = page.total_pages().saturating_sub(1);
    links.push(format!("<{}>; rel=\"last\"", page_uri(base_url, last, page.size)));
    links.push(format!("<{}>; rel=\"first\"", page_uri(base_url, 0, page.size)));
    links.join(",")
}

/// `X-Total-Count` and `Link` headers for a page
pub fn pagination<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = total_count(page.total);
    insert(&mut headers, LINK, &link_header(page, base_url));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PageRequest, Sort};

    fn page(number: u32, size: u32, total: u64) -> Page<()> {
        Page::new(Vec::new(), total, &PageRequest::new(number, size, Sort::unsorted()))
    }

    #[test]
    fn test_entity_creation_alert() {
        // テスト項目: 作成アラートにはメッセージキーと id が入る
        // when (操作):
        let headers = entity_creation_alert(RoomId::new(12).unwrap());

        // then (期待する結果):
        assert_eq!(headers[ALERT_HEADER], "roomfinderApp.room.created");
        assert_eq!(headers[PARAMS_HEADER], "12");
    }

    #[test]
    fn test_entity_deletion_alert_accepts_unstored_id() {
        // テスト項目: 保存されたことのない id でも削除アラートを作れる
        // when (操作):
        let headers = entity_deletion_alert(0);

        // then (期待する結果):
        assert_eq!(headers[ALERT_HEADER], "roomfinderApp.room.deleted");
        assert_eq!(headers[PARAMS_HEADER], "0");
    }

    #[test]
    fn test_failure_alert() {
        // テスト項目: 失敗アラートにはエラーキーとエンティティ名が入る
        // when (操作):
        let headers = failure_alert("error.idexists");

        // then (期待する結果):
        assert_eq!(headers[ERROR_HEADER], "error.idexists");
        assert_eq!(headers[PARAMS_HEADER], "room");
    }

    #[test]
    fn test_link_header_middle_page() {
        // テスト項目: 中間ページでは next / prev / last / first が揃う
        // when (操作):
        let link = link_header(&page(1, 10, 35), "/api/rooms");

        // then (期待する結果):
        assert_eq!(
            link,
            "</api/rooms?page=2&size=10>; rel=\"next\",\
             </api/rooms?page=0&size=10>; rel=\"prev\",\
             </api/rooms?page=3&size=10>; rel=\"last\",\
             </api/rooms?page=0&size=10>; rel=\"first\""
        );
    }

    #[test]
    fn test_link_header_empty_listing() {
        // テスト項目: 0 件の場合は last / first ともに 0 ページ目
        // when (操作):
        let link = link_header(&page(0, 20, 0), "/api/rooms");

        // then (期待する結果):
        assert_eq!(
            link,
            "</api/rooms?page=0&size=20>; rel=\"last\",</api/rooms?page=0&size=20>; rel=\"first\""
        );
    }

    #[test]
    fn test_pagination_sets_total_count() {
        // テスト項目: X-Total-Count に総件数が入る
        // when (操作):
        let headers = pagination(&page(0, 20, 3), "/api/rooms");

        // then (期待する結果):
        assert_eq!(headers[TOTAL_COUNT_HEADER], "3");
        assert!(headers.contains_key(LINK));
    }
}
