// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the Solscan endpoint groups
//!
//! Literal URLs are checked against a recording request helper; the wire
//! behavior end to end is checked with wiremock.

use std::sync::Arc;

use serde_json::json;
use solscan_api::{
    AccountTransactionsRequest, AccountTransferRequest, ActivitiesRequest,
    BalanceChangeRequest, BlockTransactionsRequest, CollectionItemsRequest,
    CollectionListsRequest, DefiActivitiesRequest, Endpoint, HoldersRequest,
    LastTransactionsRequest, MarketsRequest, NewsRequest, SolscanError, StakeRequest,
    TokenAccountsRequest, TokenListRequest, TokenTransferRequest, TransferExportRequest,
};
use solscan_http::ApiError;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use fixtures::*;

#[tokio::test]
async fn account_detail_url() {
    let (api, recorder) = recording_api();

    api.account().detail("Addr1").await.unwrap();

    assert_eq!(recorder.last_url(), expected_url("account/detail?address=Addr1"));
}

#[tokio::test]
async fn account_transactions_url() {
    let (api, recorder) = recording_api();
    let request = AccountTransactionsRequest {
        limit: Some(20),
        ..AccountTransactionsRequest::new("Addr1")
    };

    api.account().transactions(&request).await.unwrap();

    assert_eq!(
        recorder.last_url(),
        expected_url("account/transactions?address=Addr1&limit=20")
    );
}

#[tokio::test]
async fn token_markets_url() {
    let (api, recorder) = recording_api();
    let request = MarketsRequest {
        page: Some(2),
        ..MarketsRequest::new(["A", "B"])
    };

    api.token().markets(&request).await.unwrap();

    assert_eq!(
        recorder.last_url(),
        expected_url("token/markets?token[]=A&token[]=B&page=2")
    );
}

#[tokio::test]
async fn block_last_uses_default_limit() {
    let (api, recorder) = recording_api();

    api.block().last(None).await.unwrap();
    api.block().last(Some(5)).await.unwrap();

    assert_eq!(
        recorder.urls(),
        vec![
            expected_url("block/last?limit=100"),
            expected_url("block/last?limit=5"),
        ]
    );
}

#[tokio::test]
async fn account_transfer_serializes_booleans() {
    let (api, recorder) = recording_api();
    let request = AccountTransferRequest {
        exclude_amount_zero: Some(true),
        ..AccountTransferRequest::new("Addr1")
    };

    api.account().transfer(&request).await.unwrap();

    let url = recorder.last_url();
    assert!(url.starts_with(&expected_url("account/transfer?address=Addr1")));
    assert!(url.ends_with("&exclude_amount_zero=true"));
}

#[tokio::test]
async fn account_transfer_rejects_wrong_kind_before_any_request() {
    let (api, recorder) = recording_api();

    let result = AccountTransferRequest::from_json(json!({
        "address": "Addr1",
        "exclude_amount_zero": "yes",
    }));

    match result {
        Err(SolscanError::TypeMismatch { parameter, .. }) => {
            assert_eq!(parameter, "exclude_amount_zero");
        }
        Ok(request) => {
            api.account().transfer(&request).await.unwrap();
            panic!("Expected TypeMismatch error, request was accepted");
        }
        Err(other) => panic!("Expected TypeMismatch error, got: {other:?}"),
    }
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn nft_price_without_currency_issues_no_request() {
    let (api, recorder) = recording_api();
    let request = ActivitiesRequest {
        price: Some(vec![1, 100]),
        ..Default::default()
    };

    let error = api.nft().activities(&request).await.unwrap_err();

    assert!(matches!(error, SolscanError::Precondition { .. }));
    assert!(error.is_validation());
    assert!(recorder.calls().is_empty());
}

#[tokio::test]
async fn nft_price_with_currency_is_sent() {
    let (api, recorder) = recording_api();
    let request = ActivitiesRequest {
        currency_token: Some("USDC".to_string()),
        price: Some(vec![1, 100]),
        ..Default::default()
    };

    api.nft().activities(&request).await.unwrap();

    assert_eq!(
        recorder.last_url(),
        expected_url("nft/activities?page=1&currency_token=USDC&price[]=1&price[]=100")
    );
}

#[tokio::test]
async fn identical_calls_produce_identical_urls() {
    let (api, recorder) = recording_api();
    let request = TokenAccountsRequest {
        hide_zero: Some(true),
        page_size: Some(10),
        ..TokenAccountsRequest::new("Addr1", "token")
    };

    api.account().token_accounts(&request).await.unwrap();
    api.account().token_accounts(&request).await.unwrap();

    let urls = recorder.urls();
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0], urls[1]);
    assert_eq!(request.query().unwrap(), request.query().unwrap());
}

#[tokio::test]
async fn every_request_carries_the_token_header() {
    let (api, recorder) = recording_api();

    api.monitoring().usage().await.unwrap();
    api.transaction().detail("Sig1").await.unwrap();
    api.token().top().await.unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 3);
    for call in calls {
        assert_eq!(call.headers.len(), 1);
        assert_eq!(
            call.headers.get("token").map(String::as_str),
            Some(TEST_API_KEY)
        );
    }
}

#[tokio::test]
async fn parameterless_endpoints_have_no_query() {
    let (api, recorder) = recording_api();

    api.monitoring().usage().await.unwrap();
    api.token().top().await.unwrap();

    assert_eq!(
        recorder.urls(),
        vec![expected_url("monitor/usage"), expected_url("token/top")]
    );
}

#[tokio::test]
async fn groups_are_shared_across_tasks() {
    let (api, _recorder) = recording_api();
    let api = Arc::new(api);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { std::ptr::from_ref(api.account()) as usize })
        })
        .collect();

    let mut addresses = Vec::new();
    for handle in handles {
        addresses.push(handle.await.unwrap());
    }
    addresses.dedup();
    assert_eq!(addresses.len(), 1);
    assert_eq!(addresses[0], std::ptr::from_ref(api.account()) as usize);
}

/// The response body is returned as decoded, and the key travels in `token`
#[tokio::test]
async fn account_detail_end_to_end() {
    let mock_server = MockServer::start().await;
    let api = mock_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/account/detail"))
        .and(query_param("address", "Addr1"))
        .and(header("token", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(SolscanFixture::success_response(SolscanFixture::account_detail())),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = api.account().detail("Addr1").await.unwrap();

    assert_eq!(result["success"], json!(true));
    assert_eq!(result["data"]["lamports"], json!(2_039_280));
}

#[tokio::test]
async fn list_filters_reach_the_provider() {
    let mock_server = MockServer::start().await;
    let api = mock_api(&mock_server);

    SolscanFixture::mount_success(&mock_server, "/token/markets", json!([])).await;

    let request = MarketsRequest {
        page: Some(2),
        ..MarketsRequest::new(["A", "B"])
    };
    api.token().markets(&request).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("token[]=A&token[]=B&page=2")
    );
}

#[tokio::test]
async fn provider_errors_pass_through() {
    let mock_server = MockServer::start().await;
    let api = mock_api(&mock_server);

    Mock::given(method("GET"))
        .and(path("/block/last"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/monitor/usage"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let rate_limited = api.block().last(None).await.unwrap_err();
    assert!(matches!(
        rate_limited,
        SolscanError::Api(ApiError::RateLimitExceeded {
            retry_after_seconds: 3
        })
    ));
    assert!(!rate_limited.is_validation());

    let unauthorized = api.monitoring().usage().await.unwrap_err();
    assert!(matches!(
        unauthorized,
        SolscanError::Api(ApiError::Authentication { .. })
    ));
}

#[tokio::test]
async fn validation_failure_sends_nothing() {
    let mock_server = MockServer::start().await;
    let api = mock_api(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let request = ActivitiesRequest {
        currency_token: Some(String::new()),
        price: Some(vec![5, 10]),
        ..Default::default()
    };
    assert!(api.nft().activities(&request).await.is_err());
}

#[tokio::test]
async fn public_chain_info() {
    let mock_server = MockServer::start().await;
    let api = mock_public_api(&mock_server);

    SolscanFixture::mount_success(&mock_server, "/chaininfo", SolscanFixture::chain_info()).await;

    let result = api.chain_info().await.unwrap();

    assert_eq!(result["data"]["currentEpoch"], json!(516));
}

#[tokio::test]
async fn account_endpoint_urls() {
    let (api, recorder) = recording_api();
    let account = api.account();

    account
        .defi_activities(&DefiActivitiesRequest::new("Addr1"))
        .await
        .unwrap();
    account
        .token_accounts(&TokenAccountsRequest::new("Addr1", "nft"))
        .await
        .unwrap();
    account
        .balance_change_activities(&BalanceChangeRequest::new("Addr1"))
        .await
        .unwrap();
    account.stake(&StakeRequest::new("Addr1")).await.unwrap();
    account
        .rewards_export("Addr1", 1_700_000_000, 1_700_086_400)
        .await
        .unwrap();
    account
        .transfer_export(&TransferExportRequest {
            to: Some("Dest".to_string()),
            ..TransferExportRequest::new("Addr1")
        })
        .await
        .unwrap();

    let expected: Vec<String> = [
        "account/defi/activities?address=Addr1",
        "account/token-accounts?address=Addr1&type=nft",
        "account/balance_change?address=Addr1",
        "account/stake?address=Addr1",
        "account/reward/export?address=Addr1&time_from=1700000000&time_to=1700086400",
        "account/transfer/export?address=Addr1&to=Dest",
    ]
    .into_iter()
    .map(expected_url)
    .collect();
    assert_eq!(recorder.urls(), expected);
}

#[tokio::test]
async fn token_endpoint_urls() {
    let (api, recorder) = recording_api();
    let token = api.token();

    token.meta("Mint1").await.unwrap();
    token.market_info("Mint1").await.unwrap();
    token
        .transfer(&TokenTransferRequest {
            to: Some("Dest".to_string()),
            ..TokenTransferRequest::new("Mint1")
        })
        .await
        .unwrap();
    token
        .defi_activities(&DefiActivitiesRequest::new("Mint1"))
        .await
        .unwrap();
    token.list(&TokenListRequest::default()).await.unwrap();
    token
        .market_volume("Mint1", Some(&[20_240_101, 20_240_131][..]))
        .await
        .unwrap();
    token.trending(None).await.unwrap();
    token.price("Mint1", None).await.unwrap();
    token
        .holders(&HoldersRequest::new("Mint1"))
        .await
        .unwrap();

    let expected: Vec<String> = [
        "token/meta?address=Mint1",
        "token/market/info?address=Mint1",
        "token/transfer?address=Mint1&to=Dest",
        "token/defi/activities?address=Mint1",
        "token/list?page=1",
        "token/market/volume?address=Mint1&time[]=20240101&time[]=20240131",
        "token/trending?limit=10",
        "token/price?address=Mint1",
        "token/holders?address=Mint1&page=1",
    ]
    .into_iter()
    .map(expected_url)
    .collect();
    assert_eq!(recorder.urls(), expected);
}

#[tokio::test]
async fn nft_endpoint_urls() {
    let (api, recorder) = recording_api();
    let nft = api.nft();

    nft.news(&NewsRequest::default()).await.unwrap();
    nft.activities(&ActivitiesRequest {
        to: Some("Dest".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    nft.collection_lists(&CollectionListsRequest::default())
        .await
        .unwrap();
    nft.collection_items(&CollectionItemsRequest::new("Coll1"))
        .await
        .unwrap();

    let expected: Vec<String> = [
        "nft/news?filter=created_time&page=1",
        "nft/activities?page=1&to=Dest",
        "nft/collection/lists?range=1&page=1",
        "nft/collection/items?collection=Coll1&page=1",
    ]
    .into_iter()
    .map(expected_url)
    .collect();
    assert_eq!(recorder.urls(), expected);
}

#[tokio::test]
async fn transaction_and_block_endpoint_urls() {
    let (api, recorder) = recording_api();

    api.transaction()
        .last(&LastTransactionsRequest::default())
        .await
        .unwrap();
    api.transaction().detail("Sig1").await.unwrap();
    api.transaction().actions("Sig1").await.unwrap();
    api.block()
        .transactions(&BlockTransactionsRequest {
            page: Some(2),
            ..BlockTransactionsRequest::new(250_000_000)
        })
        .await
        .unwrap();
    api.block().detail(250_000_000).await.unwrap();

    let expected: Vec<String> = [
        "transaction/last?filter=exceptVote&limit=100",
        "transaction/detail?tx=Sig1",
        "transaction/actions?tx=Sig1",
        "block/transactions?block=250000000&page=2",
        "block/detail?block=250000000",
    ]
    .into_iter()
    .map(expected_url)
    .collect();
    assert_eq!(recorder.urls(), expected);
}
