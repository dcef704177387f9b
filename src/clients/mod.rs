//! Handles for talking to actors.

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures map to [`ClientError::ActorCommunication`](crate::error::ClientError).
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::ClientError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::ClientError::ActorCommunication("Actor closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::ClientError::ActorCommunication("Actor dropped".to_string()))
            }
        }
    };
}

mod cart_client;

pub use cart_client::CartClient;
