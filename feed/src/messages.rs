//! User-facing strings
//!
//! Korean copy shown by feed front ends, kept in one place.

/// Page titles
pub const TITLE_LIKED_REVIEWS: &str = "좋아요 누른 글";
pub const TITLE_MY_REVIEWS: &str = "내가 쓴 글";
pub const TITLE_ALL_REVIEWS: &str = "접종 후기";

/// Empty-state descriptions
pub const EMPTY_LIKED_REVIEWS: &str = "좋아요 누른 글이 없습니다";
pub const EMPTY_MY_REVIEWS: &str = "작성한 글이 없습니다";
pub const EMPTY_ALL_REVIEWS: &str = "등록된 후기가 없습니다";

pub const FAIL_TO_GET_REVIEW_LIST: &str = "후기 목록을 불러올 수 없습니다";
pub const FAIL_TO_SERVER: &str = "오류가 발생했습니다. 다시 한 번 시도해주세요.";
pub const NEED_LOGIN: &str = "로그인이 필요한 서비스입니다.";
