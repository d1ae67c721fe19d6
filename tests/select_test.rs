use codex::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_bare_table() {
    let users = table("users");
    assert_eq!(users.select().to_sql().unwrap(), r#"SELECT "users".* FROM "users""#);
}

#[test]
fn test_project_and_where() {
    let users = table("users");
    let mut q = users.select();
    q.project([users.attr("id"), users.attr("email")]);
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users"."id", "users"."email" FROM "users""#
    );

    q.filter(users.attr("id").eq(1));
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users"."id", "users"."email" FROM "users" WHERE ("users"."id" = 1)"#
    );
}

#[test]
fn test_attribute_rendering_ignores_call_order() {
    let users = table("users");
    let x = users.attr("x");

    let mut q = users.select();
    q.limit(3).order(x.clone()).filter(x.clone().gt(0)).project([x]);
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users"."x" FROM "users" WHERE ("users"."x" > 0) ORDER BY "users"."x" LIMIT 3"#
    );
}

#[test]
fn test_to_sql_is_idempotent() {
    let users = table("users");
    let mut q = users.select();
    q.filter("1 = 1").limit(10);
    assert_eq!(q.to_sql().unwrap(), q.to_sql().unwrap());
}

#[test]
fn test_projection_order_preserved() {
    let users = table("users");
    let mut q = users.select();
    q.project(["a", "b"]).project(["c"]);
    assert_eq!(q.to_sql().unwrap(), r#"SELECT a, b, c FROM "users""#);
}

#[test]
fn test_multiple_wheres_are_anded() {
    let users = table("users");
    let mut q = users.select();
    q.filter(users.attr("id").eq(1)).filter("active");
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" WHERE ("users"."id" = 1) AND (active)"#
    );
}

#[test]
fn test_inner_join_on() {
    let users = table("users");
    let posts = table("posts");
    let mut q = users.select();
    q.inner_join(&posts)
        .on(posts.attr("user_id").eq(users.attr("id")));
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" INNER JOIN "posts" ON "posts"."user_id" = "users"."id""#
    );
}

#[test]
fn test_outer_join_with_relation() {
    let users = table("users");
    let posts = table("posts");
    let mut q = users.select();
    q.outer_join(posts.relation())
        .on(posts.attr("user_id").eq(users.attr("id")));
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" LEFT OUTER JOIN "posts" ON "posts"."user_id" = "users"."id""#
    );
}

#[test]
fn test_bare_on_leaves_statement_unchanged() {
    let users = table("users");
    let mut q = users.select();
    q.on(users.attr("id").eq(1));
    assert_eq!(q.to_sql().unwrap(), r#"SELECT "users".* FROM "users""#);
}

#[test]
fn test_last_on_wins() {
    let users = table("users");
    let t1 = table("t1");
    let t2 = table("t2");
    let mut q = users.select();
    q.inner_join(&t1).inner_join(&t2).on("t2.a = 1");
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" INNER JOIN "t1" INNER JOIN "t2" ON t2.a = 1"#
    );

    q.on("t2.a = 2");
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" INNER JOIN "t1" INNER JOIN "t2" ON t2.a = 2"#
    );
}

#[test]
fn test_cross_join_has_no_on() {
    let users = table("users");
    let roles = table("roles");
    let mut q = users.select();
    q.cross_join(&roles).on("ignored");
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" CROSS JOIN "roles""#
    );
}

#[test]
fn test_limit_offset_replace() {
    let users = table("users");
    let mut q = users.select();
    q.limit(5).limit(10).offset(1).offset(2);
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" LIMIT 10 OFFSET 2"#
    );
}

#[test]
fn test_union_renders_both_sides() {
    let users = table("users");
    let admins = table("admins");

    let mut a = users.select();
    a.filter(users.attr("id").eq(1));
    let mut b = admins.select();
    b.project([admins.attr("id")]);

    let a_sql = a.to_sql().unwrap();
    let b_sql = b.to_sql().unwrap();

    a.union(b);
    assert_eq!(a.to_sql().unwrap(), format!("{} UNION {}", a_sql, b_sql));
}

#[test]
fn test_intersect_and_except_keywords() {
    let users = table("users");
    let admins = table("admins");

    let mut q = users.select();
    q.intersect(admins.select());
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" INTERSECT SELECT "admins".* FROM "admins""#
    );

    q.except(admins.select());
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" EXCEPT SELECT "admins".* FROM "admins""#
    );
}

#[test]
fn test_find_and_first() {
    let users = table("users");
    let mut q = users.select();
    q.find(3);
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" WHERE ("users"."id" = 3) LIMIT 1"#
    );

    let mut q = users.select();
    q.order(users.attr("created_at").desc()).first();
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" ORDER BY "users"."created_at" DESC LIMIT 1"#
    );
}

#[test]
fn test_unknown_engine_keeps_previous() {
    let users = table("users");
    let mut q = users.select();
    q.engine("sqlite").engine("nope").filter(users.attr("ok").eq(false));
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" WHERE ("users"."ok" = 0)"#
    );
}

#[test]
fn test_string_values_are_escaped() {
    let users = table("users");
    let mut q = users.select();
    q.filter(users.attr("name").eq("o'brien"));
    assert_eq!(
        q.to_sql().unwrap(),
        r#"SELECT "users".* FROM "users" WHERE ("users"."name" = 'o''brien')"#
    );
}

#[test]
fn test_tree_serializes() {
    let users = table("users");
    let mut q = users.select();
    q.project([users.attr("id")]).limit(1);
    let json = serde_json::to_value(q.tree()).unwrap();
    assert_eq!(json["limit"], serde_json::json!(1));
    assert_eq!(json["cores"][0]["source"]["relation"]["name"], serde_json::json!("users"));
}
