//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use tokio::net::TcpListener;

/// A trimmed copy of the Prime Pages `all.txt` layout: banner, column
/// headers, ranked entries (one with a letter suffix), a truncated entry, and
/// a footer.
pub const LISTING: &str = "\
                  THE LARGEST KNOWN PRIMES
         (The 5,000 largest known primes)

----- ------------------------------- -------- ----- ---- --------------
 rank  description                     digits  who   year comment
----- ------------------------------- -------- ----- ---- --------------
    1  2^136279841-1                   41024320 G16   2024 Mersenne 52
    2  2^82589933-1                    24862048 G15   2018 Mersenne 51??
    3  2^77232917-1                    23249425
   12a 10223*2^31172165+1               9383761 SB12  2016 Seventeen or Bust

KEY TO COMMENTS (partial)
  'Mersenne 52' the 52nd Mersenne prime
";

/// Records the listing above yields, as `(expression, digits, description)`.
pub const LISTING_RECORDS: &[(&str, u64, &str)] = &[
    ("2^136279841-1", 41024320, "2024 Mersenne 52"),
    ("2^82589933-1", 24862048, "2018 Mersenne 51??"),
    ("10223*2^31172165+1", 9383761, "2016 Seventeen or Bust"),
];

/// Starts a mock HTTP server on a random available port.
///
/// Returns the base URL (e.g., `http://127.0.0.1:54321`) and a `JoinHandle`
/// for the server task; `abort()` it when the test completes.
pub async fn start_mock_server(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://127.0.0.1:{}", addr.port());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    // Give the server a moment to start accepting connections.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    (url, handle)
}
