use super::*;

#[tokio::test]
async fn get_rtmp_url() {
    let expected = BroadcastingUrlContainer {
        enabled: true,
        url: Some("rtmp://rtmp02.twitcasting.tv/publish/".into()),
        stream_key: Some("twitcasting_jp?key=abcdef".into()),
    };
    let server = MockServer::start(200, &expected).await;

    let resp = server.locator().broadcasting.get_rtmp_url().await.unwrap();
    assert_eq!(resp, expected);

    let req = server.only_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/rtmp_url");
    req.assert_api_headers(BEARER);
}

#[tokio::test]
async fn get_webm_url_disabled() {
    let expected = BroadcastingUrlContainer {
        enabled: false,
        url: None,
        stream_key: None,
    };
    let server = MockServer::start(200, &expected).await;

    let resp = server.locator().broadcasting.get_webm_url().await.unwrap();
    assert_eq!(resp, expected);
    assert_eq!(server.only_request().path, "/webm_url");
}

#[tokio::test]
async fn get_rtmp_url_error_response() {
    let server = MockServer::start(401, &invalid_token()).await;

    let result = server.locator().broadcasting.get_rtmp_url().await;
    assert_invalid_token(result, 401);
}
