//! CORS 中间件
//!
//! 为所有响应附加宽松的跨域头，并直接应答 OPTIONS 预检请求

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    http::Method,
    Error, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
const ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "Origin, Content-Type, Accept",
);
const ALLOW_METHODS: (&str, &str) = (
    "Access-Control-Allow-Methods",
    "GET, POST, PUT, DELETE, OPTIONS",
);

/// CORS 中间件
pub struct CorsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for CorsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct CorsMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            // 预检请求不进入路由，直接返回空 200
            if req.method() == Method::OPTIONS {
                let response = HttpResponse::Ok()
                    .insert_header(ALLOW_ORIGIN)
                    .insert_header(ALLOW_HEADERS)
                    .insert_header(ALLOW_METHODS)
                    .finish();
                return Ok(req.into_response(response).map_into_right_body());
            }

            let mut res = service.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("access-control-allow-origin"),
                HeaderValue::from_static(ALLOW_ORIGIN.1),
            );
            headers.insert(
                HeaderName::from_static("access-control-allow-headers"),
                HeaderValue::from_static(ALLOW_HEADERS.1),
            );
            headers.insert(
                HeaderName::from_static("access-control-allow-methods"),
                HeaderValue::from_static(ALLOW_METHODS.1),
            );
            Ok(res.map_into_left_body())
        })
    }
}
