macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $get_method:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $get_method(
                &self,
                id: String,
            ) -> Result<$entity, <$entity as crate::actor_framework::Entity>::Error> {
                tracing::debug!("Sending request");
                self.inner.get(id).await
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $get_method:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $get_method);
    };
}
