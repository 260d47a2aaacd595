use std::ops::Range;
use tower::BoxError;
use tower::filter::Predicate;

use crate::error::DispatchError;
use crate::types::request::Request;

/// Filter predicate holding requests to the building's floors. Without a
/// range every request passes, matching the unchecked elevator.
#[derive(Debug, Clone, Default)]
pub struct FloorBounds {
    floors: Option<Range<i32>>,
}

impl FloorBounds {
    pub fn strict(floor_count: usize) -> Self {
        let top = i32::try_from(floor_count).unwrap_or(i32::MAX);
        Self {
            floors: Some(0..top),
        }
    }

    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn check_request(&self, request: &Request) -> Result<(), DispatchError> {
        let Some(range) = &self.floors else {
            return Ok(());
        };
        match request.floors().into_iter().find(|f| !range.contains(f)) {
            Some(floor) => Err(DispatchError::InvalidFloor {
                floor,
                floors: range.end as usize,
            }),
            None => Ok(()),
        }
    }
}

impl Predicate<Request> for FloorBounds {
    type Request = Request;

    fn check(&mut self, request: Request) -> Result<Self::Request, BoxError> {
        self.check_request(&request)?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Building;
    use crate::services::dispatcher::DispatcherService;
    use crate::types::passenger::Passenger;
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::{Service, ServiceBuilder, ServiceExt};

    #[test]
    fn test_permissive_passes_everything() {
        let bounds = FloorBounds::permissive();
        assert!(bounds.check_request(&Request::AddTargetFloor(-40)).is_ok());
        assert!(bounds.check_request(&Request::AddTargetFloor(1000)).is_ok());
    }

    #[test]
    fn test_strict_rejects_outside_floors() {
        let bounds = FloorBounds::strict(5);
        assert!(bounds.check_request(&Request::AddTargetFloor(4)).is_ok());
        assert!(bounds.check_request(&Request::Move).is_ok());
        assert_eq!(
            bounds.check_request(&Request::AddTargetFloor(5)),
            Err(DispatchError::InvalidFloor { floor: 5, floors: 5 })
        );
        assert_eq!(
            bounds.check_request(&Request::AddPassenger(Passenger::new(2, -1, 0))),
            Err(DispatchError::InvalidFloor { floor: -1, floors: 5 })
        );
    }

    #[tokio::test]
    async fn test_filter_keeps_rejected_request_out() {
        let building = Arc::new(Mutex::new(Building::new(5)));
        let mut svc = ServiceBuilder::new()
            .filter(FloorBounds::strict(5))
            .service(DispatcherService::new(Arc::clone(&building)));

        let err = ServiceExt::<Request>::ready(&mut svc)
            .await
            .unwrap()
            .call(Request::AddTargetFloor(9))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<DispatchError>().is_some());
        assert!(building.lock().await.elevator().is_idle());
    }
}
