//! Central client step definitions, run against an in-process tonic server.

use std::net::SocketAddr;

use cucumber::{given, then, when, World};
use nexuspoint_client::proto::product_service_server::{ProductService, ProductServiceServer};
use nexuspoint_client::proto::user_service_server::{UserService, UserServiceServer};
use nexuspoint_client::proto::{
    GetProductRequest, GetProductResponse, GetProductsRequest, GetProductsResponse,
    GetProfileRequest, GetProfileResponse, GetUsersRequest, GetUsersResponse, Product, Profile,
    User,
};
use nexuspoint_client::{CentralClient, ClientError, UpstreamConfig};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Code, Request, Response, Status};

struct FakeUsers;

#[tonic::async_trait]
impl UserService for FakeUsers {
    async fn get_users(
        &self,
        _request: Request<GetUsersRequest>,
    ) -> Result<Response<GetUsersResponse>, Status> {
        Ok(Response::new(GetUsersResponse {
            users: vec![
                User {
                    id: 1,
                    name: "Ada".into(),
                    email: "ada@example.com".into(),
                    location: "London".into(),
                },
                User {
                    id: 2,
                    name: "Grace".into(),
                    email: "grace@example.com".into(),
                    location: "Arlington".into(),
                },
            ],
        }))
    }

    async fn get_profile(
        &self,
        request: Request<GetProfileRequest>,
    ) -> Result<Response<GetProfileResponse>, Status> {
        if request.into_inner().user_id != 1 {
            return Err(Status::not_found("profile not found"));
        }
        Ok(Response::new(GetProfileResponse {
            profile: Some(Profile {
                id: 1,
                bio: "Analyst".into(),
                website: "https://ada.example.com".into(),
                company: "Engines Ltd".into(),
                role: "Programmer".into(),
            }),
        }))
    }
}

struct FakeProducts;

impl FakeProducts {
    fn catalog() -> Vec<Product> {
        vec![Product {
            id: 7,
            name: "Loom".into(),
            description: "Punch-card loom".into(),
            price: 120.5,
            stock: 3,
        }]
    }
}

#[tonic::async_trait]
impl ProductService for FakeProducts {
    async fn get_products(
        &self,
        _request: Request<GetProductsRequest>,
    ) -> Result<Response<GetProductsResponse>, Status> {
        Ok(Response::new(GetProductsResponse {
            products: Self::catalog(),
        }))
    }

    async fn get_product(
        &self,
        request: Request<GetProductRequest>,
    ) -> Result<Response<GetProductResponse>, Status> {
        let id = request.into_inner().product_id;
        Self::catalog()
            .into_iter()
            .find(|p| p.id == id)
            .map(|p| Response::new(GetProductResponse { product: Some(p) }))
            .ok_or_else(|| Status::not_found("product not found"))
    }
}

#[derive(Debug)]
enum Outcome {
    Users(Vec<User>),
    Profile(Profile),
    Products(Vec<Product>),
    Product(Product),
}

/// Test context for central client scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct CentralClientWorld {
    addr: Option<SocketAddr>,
    server: Option<tokio::task::JoinHandle<()>>,
    client: Option<CentralClient>,
    outcome: Option<Result<Outcome, ClientError>>,
}

impl CentralClientWorld {
    fn new() -> Self {
        Self {
            addr: None,
            server: None,
            client: None,
            outcome: None,
        }
    }

    fn client(&self) -> &CentralClient {
        self.client.as_ref().expect("client not connected")
    }

    fn outcome(&self) -> &Result<Outcome, ClientError> {
        self.outcome.as_ref().expect("no call made")
    }
}

impl Drop for CentralClientWorld {
    fn drop(&mut self) {
        if let Some(handle) = self.server.take() {
            handle.abort();
        }
    }
}

// --- Given steps ---

#[given("a central service with users and products")]
async fn given_central_service(world: &mut CentralClientWorld) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    world.addr = Some(listener.local_addr().unwrap());

    world.server = Some(tokio::spawn(async move {
        Server::builder()
            .add_service(UserServiceServer::new(FakeUsers))
            .add_service(ProductServiceServer::new(FakeProducts))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .ok();
    }));
}

#[given("a client connected to it")]
async fn given_client(world: &mut CentralClientWorld) {
    let addr = world.addr.expect("server not started");
    let config = UpstreamConfig::for_address(addr.to_string());
    world.client = Some(CentralClient::connect(&config).await.unwrap());
}

// --- When steps ---

#[when("I list users")]
async fn when_list_users(world: &mut CentralClientWorld) {
    let result = world.client().list_users("corr-users").await;
    world.outcome = Some(result.map(Outcome::Users));
}

#[when(expr = "I fetch the profile for user {int}")]
async fn when_fetch_profile(world: &mut CentralClientWorld, user_id: i32) {
    let result = world.client().get_profile(user_id, "corr-profile").await;
    world.outcome = Some(result.map(Outcome::Profile));
}

#[when(expr = "I fetch product {int}")]
async fn when_fetch_product(world: &mut CentralClientWorld, product_id: i32) {
    let result = world.client().get_product(product_id, "corr-product").await;
    world.outcome = Some(result.map(Outcome::Product));
}

#[when("I clone the client and list products with the clone")]
async fn when_clone_and_list(world: &mut CentralClientWorld) {
    let clone = world.client().clone();
    let result = clone.list_products("corr-clone").await;
    world.outcome = Some(result.map(Outcome::Products));
}

// --- Then steps ---

#[then(expr = "I should receive {int} records")]
async fn then_record_count(world: &mut CentralClientWorld, count: usize) {
    let len = match world.outcome() {
        Ok(Outcome::Users(users)) => users.len(),
        Ok(Outcome::Products(products)) => products.len(),
        other => panic!("expected a list, got {:?}", other),
    };
    assert_eq!(len, count);
}

#[then(expr = "record {int} should be named {string}")]
async fn then_record_named(world: &mut CentralClientWorld, position: usize, name: String) {
    match world.outcome() {
        Ok(Outcome::Users(users)) => assert_eq!(users[position - 1].name, name),
        other => panic!("expected users, got {:?}", other),
    }
}

#[then("the call should succeed")]
async fn then_call_succeeds(world: &mut CentralClientWorld) {
    assert!(world.outcome().is_ok(), "call failed: {:?}", world.outcome());
}

#[then("the call should fail with NOT_FOUND")]
async fn then_call_not_found(world: &mut CentralClientWorld) {
    match world.outcome() {
        Err(err) => {
            assert!(err.is_not_found());
            assert_eq!(err.code(), Some(Code::NotFound));
        }
        Ok(outcome) => panic!("expected NOT_FOUND, got {:?}", outcome),
    }
}

#[then(expr = "the profile company should be {string}")]
async fn then_profile_company(world: &mut CentralClientWorld, company: String) {
    match world.outcome() {
        Ok(Outcome::Profile(profile)) => assert_eq!(profile.company, company),
        other => panic!("expected a profile, got {:?}", other),
    }
}

#[then(expr = "the product stock should be {int}")]
async fn then_product_stock(world: &mut CentralClientWorld, stock: i32) {
    match world.outcome() {
        Ok(Outcome::Product(product)) => assert_eq!(product.stock, stock),
        other => panic!("expected a product, got {:?}", other),
    }
}
