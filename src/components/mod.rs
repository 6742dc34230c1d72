mod protected_route;

pub use protected_route::ProtectedRoute;
