pub const BANNER: &str = "Hunger Rescue Server is running on...";

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "Server banner",
    responses(
        (status = 200, body = String)
    ),
)]
pub async fn banner() -> &'static str {
    BANNER
}
