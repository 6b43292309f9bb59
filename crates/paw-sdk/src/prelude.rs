//! Common imports for storefront code.

pub use paw_cache::{keys, CacheError, Store, StoredIdentity};

pub use paw_commerce::prelude::*;

pub use paw_state::payment::{
    CheckoutRequest, PaymentError, ProviderCallback, ReinitiationFlow, VerificationRequest,
};
pub use paw_state::{
    BackendError, CartBackend, CartManager, FavoritesBackend, FavoritesManager, OrderContext,
    OrderSummary, PaymentVerifier, StateError, ToggleOutcome,
};

pub use paw_data::services::addresses::AddressService;
pub use paw_data::services::auth::{AuthService, LoginRequest, RegisterRequest};
pub use paw_data::services::favorites::FavoritesService;
pub use paw_data::services::notifications::NotificationService;
pub use paw_data::services::orders::OrderService;
pub use paw_data::services::payments::{CheckoutSession, PaymentService};
pub use paw_data::services::products::ProductService;
pub use paw_data::services::shipping::ShippingService;
pub use paw_data::services::upload::UploadService;
pub use paw_data::{ApiClient, ApiError, StorefrontConfig};

pub use paw_notify::{
    DeviceToken, NotifyError, PermissionState, PushClient, PushConfig, RegistrationState,
    TokenSink,
};
