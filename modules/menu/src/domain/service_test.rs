#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use canteen_db::{parse_id, parse_ids};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::domain::error::DomainError;
    use crate::domain::model::{
        AdditionDraft, Food, FoodAddition, FoodDraft, Menu, MenuDraft, SaveFoodCommand,
        SaveMenuCommand,
    };
    use crate::domain::repos::{FoodsRepository, MenusRepository};
    use crate::domain::service::Service;

    #[derive(Default)]
    struct Store {
        menus: Mutex<Vec<(Uuid, String, Vec<Uuid>)>>,
        foods: Mutex<Vec<Food>>,
    }

    impl Store {
        fn insert_food(&self, command: SaveFoodCommand) -> Uuid {
            let id = Uuid::new_v4();
            self.foods.lock().unwrap().push(Food {
                id,
                name: command.name,
                price: command.price,
                description: command.description,
                additions: command
                    .additions
                    .into_iter()
                    .map(|a| FoodAddition {
                        id: Uuid::new_v4(),
                        name: a.name,
                        price: a.price,
                    })
                    .collect(),
            });
            id
        }

        fn menu(&self, id: Uuid, name: &str, food_ids: &[Uuid]) -> Menu {
            let foods = self.foods.lock().unwrap();
            Menu {
                id,
                name: name.to_owned(),
                foods: food_ids
                    .iter()
                    .filter_map(|f| foods.iter().find(|food| food.id == *f).cloned())
                    .collect(),
            }
        }
    }

    struct MockMenus(Arc<Store>);
    struct MockFoods(Arc<Store>);

    #[async_trait]
    impl MenusRepository for MockMenus {
        async fn find_all(&self) -> Result<Vec<Menu>, DomainError> {
            let rows = self.0.menus.lock().unwrap().clone();
            Ok(rows
                .iter()
                .map(|(id, name, foods)| self.0.menu(*id, name, foods))
                .collect())
        }

        async fn find_by_id(&self, id: &str) -> Result<Menu, DomainError> {
            let uuid = parse_id(id)?;
            let row = self
                .0
                .menus
                .lock()
                .unwrap()
                .iter()
                .find(|(m, _, _)| *m == uuid)
                .cloned()
                .ok_or_else(|| DomainError::menu_not_found(id))?;
            Ok(self.0.menu(row.0, &row.1, &row.2))
        }

        async fn save(&self, command: SaveMenuCommand) -> Result<Uuid, DomainError> {
            let id = Uuid::new_v4();
            let foods = command
                .foods
                .into_iter()
                .map(|food| self.0.insert_food(food))
                .collect();
            self.0.menus.lock().unwrap().push((id, command.name, foods));
            Ok(id)
        }

        async fn add_food(&self, menu: Uuid, food: SaveFoodCommand) -> Result<Uuid, DomainError> {
            if !self.0.menus.lock().unwrap().iter().any(|(m, _, _)| *m == menu) {
                return Err(DomainError::menu_not_found(menu.to_string()));
            }
            let food_id = self.0.insert_food(food);
            let mut menus = self.0.menus.lock().unwrap();
            if let Some(row) = menus.iter_mut().find(|(m, _, _)| *m == menu) {
                row.2.push(food_id);
            }
            Ok(food_id)
        }

        async fn change_name(&self, id: &str, name: &str) -> Result<(), DomainError> {
            let uuid = parse_id(id)?;
            let mut menus = self.0.menus.lock().unwrap();
            let row = menus
                .iter_mut()
                .find(|(m, _, _)| *m == uuid)
                .ok_or_else(|| DomainError::menu_not_found(id))?;
            name.clone_into(&mut row.1);
            Ok(())
        }

        async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
            let ids = parse_ids(ids)?;
            self.0
                .menus
                .lock()
                .unwrap()
                .retain(|(m, _, _)| !ids.contains(m));
            Ok(())
        }
    }

    #[async_trait]
    impl FoodsRepository for MockFoods {
        async fn find_by_id(&self, id: &str) -> Result<Food, DomainError> {
            let uuid = parse_id(id)?;
            self.0
                .foods
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.id == uuid)
                .cloned()
                .ok_or_else(|| DomainError::food_not_found(id))
        }

        async fn delete(&self, ids: &[String]) -> Result<(), DomainError> {
            let ids = parse_ids(ids)?;
            for row in self.0.menus.lock().unwrap().iter_mut() {
                row.2.retain(|f| !ids.contains(f));
            }
            self.0.foods.lock().unwrap().retain(|f| !ids.contains(&f.id));
            Ok(())
        }
    }

    fn service() -> (Service, Arc<Store>) {
        let store = Arc::new(Store::default());
        let svc = Service::new(
            Arc::new(MockMenus(store.clone())),
            Arc::new(MockFoods(store.clone())),
        );
        (svc, store)
    }

    fn soup() -> FoodDraft {
        FoodDraft {
            name: Some("Tomato soup".to_owned()),
            price: Some(Decimal::new(650, 2)),
            additions: vec![AdditionDraft {
                name: Some("Croutons".to_owned()),
                price: Some(Decimal::new(50, 2)),
            }],
            ..FoodDraft::default()
        }
    }

    async fn lunch(svc: &Service) -> Uuid {
        svc.create_menu(MenuDraft {
            name: Some("Lunch".to_owned()),
            foods: vec![],
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn create_menu_saves_foods_in_order() {
        let (svc, store) = service();
        let mut second = soup();
        second.name = Some("Pancakes".to_owned());

        let id = svc
            .create_menu(MenuDraft {
                name: Some(" Dinner ".to_owned()),
                foods: vec![soup(), second],
            })
            .await
            .unwrap();

        let menu = svc.menu(&id.to_string()).await.unwrap();
        assert_eq!(menu.name, "Dinner");
        let names: Vec<_> = menu.foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Tomato soup", "Pancakes"]);
        assert_eq!(menu.foods[0].description, "");
        assert_eq!(store.foods.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_menu_saves_nothing() {
        let (svc, store) = service();
        let err = svc
            .create_menu(MenuDraft {
                name: Some("Dinner".to_owned()),
                foods: vec![soup(), FoodDraft::default()],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(store.foods.lock().unwrap().is_empty());
        assert!(store.menus.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_food_appends_to_menu() {
        let (svc, _) = service();
        let menu_id = lunch(&svc).await;

        let food = svc.add_food(&menu_id.to_string(), soup()).await.unwrap();
        assert_eq!(food.additions.len(), 1);
        assert_eq!(food.price, Decimal::new(650, 2));

        let menu = svc.menu(&menu_id.to_string()).await.unwrap();
        assert_eq!(menu.foods, vec![food]);
    }

    #[tokio::test]
    async fn add_food_to_missing_menu_is_not_found() {
        let (svc, _) = service();
        for id in [Uuid::new_v4().to_string(), "not-an-id".to_owned()] {
            let err = svc.add_food(&id, soup()).await.unwrap_err();
            assert!(matches!(err, DomainError::MenuNotFound { .. }), "{id}: {err}");
        }
    }

    #[tokio::test]
    async fn add_food_with_id_is_unsupported() {
        let (svc, store) = service();
        let menu_id = lunch(&svc).await;
        let draft = FoodDraft {
            id: Some(Uuid::new_v4().to_string()),
            ..soup()
        };

        let err = svc.add_food(&menu_id.to_string(), draft).await.unwrap_err();
        assert!(matches!(err, DomainError::FoodUpdateUnsupported));
        assert!(store.foods.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_invalid_food_reports_violations() {
        let (svc, _) = service();
        let menu_id = lunch(&svc).await;

        let err = svc
            .add_food(&menu_id.to_string(), FoodDraft::default())
            .await
            .unwrap_err();
        let DomainError::Validation { errors } = err else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(errors.len(), 2);
    }

    #[tokio::test]
    async fn delete_requires_ids() {
        let (svc, _) = service();
        assert!(matches!(
            svc.delete_menus(&[]).await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            svc.delete_foods(&[]).await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            svc.delete_menus(&["x".to_owned()]).await,
            Err(DomainError::InvalidId { .. })
        ));
    }

    #[tokio::test]
    async fn delete_foods_pulls_them_from_menus() {
        let (svc, store) = service();
        let menu_id = lunch(&svc).await;
        let food = svc.add_food(&menu_id.to_string(), soup()).await.unwrap();

        svc.delete_foods(&[food.id.to_string()]).await.unwrap();

        assert!(svc.menu(&menu_id.to_string()).await.unwrap().foods.is_empty());
        assert!(store.foods.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rename_validates_then_updates() {
        let (svc, _) = service();
        let menu_id = lunch(&svc).await.to_string();

        assert!(matches!(
            svc.rename_menu(&menu_id, Some("ab")).await,
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            svc.rename_menu(&Uuid::new_v4().to_string(), Some("Brunch")).await,
            Err(DomainError::MenuNotFound { .. })
        ));

        svc.rename_menu(&menu_id, Some("Brunch")).await.unwrap();
        assert_eq!(svc.menu(&menu_id).await.unwrap().name, "Brunch");
    }
}
