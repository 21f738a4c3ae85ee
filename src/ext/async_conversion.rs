/// Fallible conversion whose work involves awaiting, such as reading a file.
///
/// Mirrors `TryFrom`, with [`AsyncTryInto`] provided for every implementor.
pub trait AsyncTryFrom<T>: Sized {
    type Error;

    async fn async_try_from(value: T) -> Result<Self, Self::Error>;
}

pub trait AsyncTryInto<T> {
    type Error;

    async fn async_try_into(self) -> Result<T, Self::Error>;
}

impl<T, U> AsyncTryInto<U> for T
where
    U: AsyncTryFrom<T>,
{
    type Error = U::Error;

    async fn async_try_into(self) -> Result<U, Self::Error> {
        U::async_try_from(self).await
    }
}
