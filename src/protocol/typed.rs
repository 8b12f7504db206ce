use super::request::RpcId;

/// Decoded parameters of one call, handed to a [`Server`](crate::server::Server) operation.
///
/// The id is attached by the dispatcher; handlers can read it to correlate
/// work with the wire call but cannot change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<T> {
    pub params: T,
    id: Option<RpcId>,
}

impl<T> Request<T> {
    pub fn new(params: T) -> Self {
        Self { params, id: None }
    }

    pub fn id(&self) -> Option<&RpcId> {
        self.id.as_ref()
    }

    pub(crate) fn with_id(mut self, id: Option<RpcId>) -> Self {
        self.id = id;
        self
    }

    pub fn into_params(self) -> T {
        self.params
    }
}

/// Result value returned by a [`Server`](crate::server::Server) operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<V> {
    pub result: V,
}

impl<V> Response<V> {
    pub fn new(result: V) -> Self {
        Self { result }
    }
}
