/// Query parameter usage example
use urlbuild::{QueryParams, Url};

fn main() {
    let url = Url::new("http://shop.example.com/list?page=2&filter[color]=red");

    // Read values
    println!("page: {:?}", url.query_param("page")); // Some("2")
    println!("all: {}", url.all_query_params()); // page=2&filter%5Bcolor%5D=red
    println!();

    // Replace a scalar
    let url = url.with_query_param("page", "3");
    println!("After page=3: {url}");

    // Merge into a nested mapping
    let filter: QueryParams = [("size", "xl")].into_iter().collect();
    let url = url.with_query_param("filter", filter);
    println!("After merge: {url}");

    // Remove one parameter, then all of them
    let url = url.without_query_param("page");
    println!("After remove: {url}");
    println!("Cleared: {}", url.without_all_query_params());
}
