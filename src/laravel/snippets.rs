//! Code snippet catalog

use super::catalog::{Categorized, Searchable};

/// A copyable code snippet; `title` is its identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snippet {
    pub title: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl Categorized for Snippet {
    fn category(&self) -> &str {
        self.category
    }
}

impl Searchable for Snippet {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title, self.description, self.category]
    }
}

/// Find a snippet by title, ignoring case
pub fn find_snippet(title: &str) -> Option<&'static Snippet> {
    let title = title.trim();
    SNIPPETS.iter().find(|s| s.title.eq_ignore_ascii_case(title))
}

pub static SNIPPETS: &[Snippet] = &[
    Snippet {
        title: "Basic Route",
        code: r#"Route::get('/welcome', function () {
    return view('welcome');
});"#,
        description: "Define a basic GET route",
        category: "Routes",
    },
    Snippet {
        title: "Route with Controller",
        code: r#"Route::get('/users', [UserController::class, 'index']);"#,
        description: "Route pointing to a controller method",
        category: "Routes",
    },
    Snippet {
        title: "Resource Route",
        code: r#"Route::resource('posts', PostController::class);"#,
        description: "RESTful resource routes",
        category: "Routes",
    },
    Snippet {
        title: "API Resource Route",
        code: r#"Route::apiResource('posts', PostController::class);"#,
        description: "API resource routes (no create/edit)",
        category: "Routes",
    },
    Snippet {
        title: "Route Group with Middleware",
        code: r#"Route::middleware(['auth'])->group(function () {
    Route::get('/dashboard', [DashboardController::class, 'index']);
    Route::get('/profile', [ProfileController::class, 'show']);
});"#,
        description: "Group routes with middleware",
        category: "Routes",
    },
    Snippet {
        title: "Route with Parameters",
        code: r#"Route::get('/users/{id}', function (string $id) {
    return 'User ' . $id;
});"#,
        description: "Route with URL parameters",
        category: "Routes",
    },
    Snippet {
        title: "Controller Method",
        code: r#"public function index()
{
    $users = User::all();
    return view('users.index', compact('users'));
}"#,
        description: "Basic controller method returning a view",
        category: "Controllers",
    },
    Snippet {
        title: "Store Method with Validation",
        code: r#"public function store(Request $request)
{
    $validated = $request->validate([
        'name' => 'required|string|max:255',
        'email' => 'required|email|unique:users',
        'password' => 'required|min:8|confirmed',
    ]);

    $user = User::create($validated);

    return redirect()->route('users.show', $user);
}"#,
        description: "Controller store method with validation",
        category: "Controllers",
    },
    Snippet {
        title: "API Response",
        code: r#"public function index()
{
    return response()->json([
        'data' => User::all(),
        'message' => 'Users retrieved successfully'
    ]);
}"#,
        description: "Return JSON response in API controller",
        category: "Controllers",
    },
    Snippet {
        title: "Model with Fillable",
        code: r#"class User extends Model
{
    protected $fillable = [
        'name',
        'email',
        'password',
    ];

    protected $hidden = [
        'password',
        'remember_token',
    ];
}"#,
        description: "Basic Eloquent model with fillable attributes",
        category: "Models",
    },
    Snippet {
        title: "HasMany Relationship",
        code: r#"public function posts(): HasMany
{
    return $this->hasMany(Post::class);
}"#,
        description: "One-to-Many relationship",
        category: "Models",
    },
    Snippet {
        title: "BelongsTo Relationship",
        code: r#"public function user(): BelongsTo
{
    return $this->belongsTo(User::class);
}"#,
        description: "Inverse One-to-Many relationship",
        category: "Models",
    },
    Snippet {
        title: "BelongsToMany Relationship",
        code: r#"public function roles(): BelongsToMany
{
    return $this->belongsToMany(Role::class);
}"#,
        description: "Many-to-Many relationship",
        category: "Models",
    },
    Snippet {
        title: "Model Scope",
        code: r#"public function scopeActive(Builder $query): void
{
    $query->where('active', true);
}

// Usage: User::active()->get();"#,
        description: "Local query scope",
        category: "Models",
    },
    Snippet {
        title: "Model Accessor",
        code: r#"protected function fullName(): Attribute
{
    return Attribute::make(
        get: fn () => "{$this->first_name} {$this->last_name}",
    );
}"#,
        description: "Eloquent accessor (Laravel 9+)",
        category: "Models",
    },
    Snippet {
        title: "Create Table Migration",
        code: r#"Schema::create('posts', function (Blueprint $table) {
    $table->id();
    $table->foreignId('user_id')->constrained()->cascadeOnDelete();
    $table->string('title');
    $table->text('body');
    $table->boolean('published')->default(false);
    $table->timestamps();
});"#,
        description: "Create table with foreign key",
        category: "Migrations",
    },
    Snippet {
        title: "Add Column Migration",
        code: r#"Schema::table('users', function (Blueprint $table) {
    $table->string('phone')->nullable()->after('email');
});"#,
        description: "Add column to existing table",
        category: "Migrations",
    },
    Snippet {
        title: "Drop Column Migration",
        code: r#"Schema::table('users', function (Blueprint $table) {
    $table->dropColumn('phone');
});"#,
        description: "Remove column from table",
        category: "Migrations",
    },
    Snippet {
        title: "Blade Layout",
        code: r#"<!DOCTYPE html>
<html>
<head>
    <title>@yield('title')</title>
</head>
<body>
    @include('partials.nav')
    
    <main>
        @yield('content')
    </main>
</body>
</html>"#,
        description: "Base Blade layout template",
        category: "Blade",
    },
    Snippet {
        title: "Blade Component",
        code: r#"<x-alert type="error" :message="$message" />"#,
        description: "Use a Blade component",
        category: "Blade",
    },
    Snippet {
        title: "Blade Conditional",
        code: r#"@if ($user->isAdmin())
    <p>Welcome, Admin!</p>
@elseif ($user->isModerator())
    <p>Welcome, Moderator!</p>
@else
    <p>Welcome, User!</p>
@endif"#,
        description: "If/else conditional in Blade",
        category: "Blade",
    },
    Snippet {
        title: "Blade Loop",
        code: r#"@foreach ($users as $user)
    <p>{{ $user->name }}</p>
@endforeach

@forelse ($users as $user)
    <p>{{ $user->name }}</p>
@empty
    <p>No users found.</p>
@endforelse"#,
        description: "Loop through collection in Blade",
        category: "Blade",
    },
    Snippet {
        title: "Form Request",
        code: r#"public function rules(): array
{
    return [
        'title' => 'required|string|max:255',
        'body' => 'required|string',
        'published_at' => 'nullable|date',
        'tags' => 'array',
        'tags.*' => 'exists:tags,id',
    ];
}"#,
        description: "Form request validation rules",
        category: "Validation",
    },
    Snippet {
        title: "Custom Validation Message",
        code: r#"public function messages(): array
{
    return [
        'title.required' => 'A title is required',
        'body.required' => 'Please provide content for your post',
    ];
}"#,
        description: "Custom validation error messages",
        category: "Validation",
    },
    Snippet {
        title: "Middleware Handle",
        code: r#"public function handle(Request $request, Closure $next): Response
{
    if (! $request->user()->isAdmin()) {
        abort(403);
    }

    return $next($request);
}"#,
        description: "Basic middleware handle method",
        category: "Middleware",
    },
    Snippet {
        title: "Feature Test",
        code: r#"public function test_users_can_view_homepage(): void
{
    $response = $this->get('/');

    $response->assertStatus(200);
    $response->assertSee('Welcome');
}"#,
        description: "Basic feature/HTTP test",
        category: "Testing",
    },
    Snippet {
        title: "Test with Authentication",
        code: r#"public function test_authenticated_user_can_create_post(): void
{
    $user = User::factory()->create();

    $response = $this->actingAs($user)
        ->post('/posts', [
            'title' => 'My Post',
            'body' => 'Content here',
        ]);

    $response->assertRedirect('/posts');
    $this->assertDatabaseHas('posts', ['title' => 'My Post']);
}"#,
        description: "Test with authenticated user",
        category: "Testing",
    },
    Snippet {
        title: "Eloquent Query",
        code: r#"$users = User::where('active', true)
    ->orderBy('created_at', 'desc')
    ->take(10)
    ->get();"#,
        description: "Chained Eloquent query",
        category: "Queries",
    },
    Snippet {
        title: "Eager Loading",
        code: r#"$posts = Post::with(['user', 'comments.user'])
    ->where('published', true)
    ->get();"#,
        description: "Eager load relationships",
        category: "Queries",
    },
    Snippet {
        title: "Query with Pagination",
        code: r#"$users = User::where('active', true)
    ->paginate(15);

// In Blade: {{ $users->links() }}"#,
        description: "Paginate query results",
        category: "Queries",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laravel::catalog::group_by_category;
    use std::collections::HashSet;

    #[test]
    fn test_titles_unique() {
        let titles: HashSet<String> = SNIPPETS.iter().map(|s| s.title.to_lowercase()).collect();
        assert_eq!(titles.len(), SNIPPETS.len());
    }

    #[test]
    fn test_find_snippet_ignores_case() {
        let snippet = find_snippet("  resource route ").unwrap();
        assert_eq!(
            snippet.code,
            "Route::resource('posts', PostController::class);"
        );
        assert!(find_snippet("Missing Snippet").is_none());
    }

    #[test]
    fn test_multiline_code_preserved() {
        let snippet = find_snippet("Basic Route").unwrap();
        assert_eq!(snippet.code.lines().count(), 3);
        assert!(snippet.code.ends_with("});"));
    }

    #[test]
    fn test_categories() {
        let groups = group_by_category(SNIPPETS);
        assert_eq!(groups.first().map(|(c, _)| *c), Some("Routes"));
        assert_eq!(groups.last().map(|(c, _)| *c), Some("Queries"));

        let models = groups.iter().find(|(c, _)| *c == "Models").unwrap();
        assert_eq!(models.1.len(), 6);
    }
}
