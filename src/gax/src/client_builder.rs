// Copyright 2025 Oracle and/or its affiliates.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client construction.
//!
//! Each service client has a `builder()` function returning a
//! [ClientBuilder]. The service endpoint comes from, in order:
//! [with_endpoint][ClientBuilder::with_endpoint],
//! [with_region][ClientBuilder::with_region], and the `OCI_REGION`
//! environment variable. Every client needs a request signer.
//!
//! ```
//! # use oci_sdk_gax::client_builder::doc_support::{Client, Signer};
//! use oci_sdk_gax::retry_policy::RetryConfiguration;
//! # tokio_test::block_on(async {
//! let client = Client::builder()
//!     .with_region("iad")
//!     .with_signer(Signer::default())
//!     .with_retry_policy(RetryConfiguration::new().with_max_attempts(3))
//!     .build()
//!     .await?;
//! # oci_sdk_gax::client_builder::Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::BackoffPolicy;
use crate::retry_policy::RetryPolicy;
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a client could not be built.
///
/// ```no_run
/// # use oci_sdk_gax::client_builder::{Error, doc_support::Client};
/// # tokio_test::block_on(async {
/// match Client::builder().build().await {
///     Ok(_) => {}
///     Err(Error::MissingSigner) => eprintln!("call with_signer() first"),
///     Err(Error::Endpoint(e)) => eprintln!("set OCI_REGION or call with_region(): {e}"),
///     Err(e) => eprintln!("cannot create the client: {e}"),
/// }
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no request signer configured, use `with_signer()`")]
    MissingSigner,
    #[error("cannot determine the service endpoint")]
    Endpoint(#[from] crate::region::Error),
    #[error("cannot initialize the HTTP client")]
    Transport(#[source] BoxError),
}

impl Error {
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self::Transport(source.into())
    }
}

/// Configures and creates a client.
///
/// `F` creates the client type of one service, `Cr` is the signer type.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    factory: F,
    config: internal::ClientConfig<Cr>,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sends requests to this endpoint instead of the regional one.
    ///
    /// Useful with test servers and private endpoints. A trailing `/` is
    /// ignored.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// The region, as an identifier (`us-ashburn-1`) or a short code (`iad`).
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    pub fn with_signer<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Logs each request and response status with [tracing].
    ///
    /// Setting `OCI_SDK_RUST_LOGGING=true` in the environment has the same
    /// effect.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Retries failed requests with this policy, unless a request overrides
    /// it. Without a policy each request is sent once.
    pub fn with_retry_policy<P: RetryPolicy + 'static>(mut self, v: P) -> Self {
        self.config.retry_policy = Some(Arc::new(v));
        self
    }

    /// The delay between retries. Defaults to
    /// [ExponentialBackoff][crate::backoff_policy::ExponentialBackoff].
    pub fn with_backoff_policy<P: BackoffPolicy + 'static>(mut self, v: P) -> Self {
        self.config.backoff_policy = Some(Arc::new(v));
        self
    }
}

#[doc(hidden)]
pub mod internal {
    //! Used by the generated clients. Not part of the public API.
    use super::*;

    /// Creates the client of one service from its configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The settings collected by [ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    }

    // Not derived, that would require `Cr: Default`.
    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod doc_support {
    //! A stand-in client for the rustdoc examples.
    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use super::{ClientBuilder, Error, Result};

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Signer {
        pub key_id: String,
    }

    #[derive(Debug)]
    pub struct Client(pub ClientConfig<Signer>);

    impl Client {
        pub fn builder() -> ClientBuilder<Factory, Signer> {
            new_builder(Factory)
        }
    }

    pub struct Factory;

    impl ClientFactory for Factory {
        type Client = Client;
        type Credentials = Signer;
        async fn build(self, config: ClientConfig<Signer>) -> Result<Client> {
            if config.cred.is_none() {
                return Err(Error::MissingSigner);
            }
            Ok(Client(config))
        }
    }
}
