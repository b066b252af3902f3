use crate::error::AppError;
use crate::model::responses::PaymentResponse;
use async_trait::async_trait;

/// Interface for the payment service
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Creates a payment for a pricing plan and sends the user to checkout
    ///
    /// Requires a stored token. Succeeds only when the answer carries a
    /// `paymentUrl`; the navigator is then pointed at it.
    async fn create_payment(&self, plan_id: &str) -> Result<PaymentResponse, AppError>;
}
